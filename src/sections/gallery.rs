use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::components::treatment_modal::TreatmentModal;

struct GalleryCase {
    title: &'static str,
    before: &'static str,
    after: &'static str,
    thumb: &'static str,
}

const CASES: [GalleryCase; 3] = [
    GalleryCase {
        title: "Treatment Result 1",
        before: "/assets/befour1.jpeg",
        after: "/assets/after1.jpeg",
        thumb: "/assets/after1.jpeg",
    },
    GalleryCase {
        title: "Treatment Result 2",
        before: "/assets/befour2.jpeg",
        after: "/assets/after2.jpeg",
        thumb: "/assets/ip1.jpeg",
    },
    GalleryCase {
        title: "Treatment Result 3",
        before: "/assets/befour3.jpeg",
        after: "/assets/after3.jpeg",
        thumb: "/assets/ip5.jpeg",
    },
];

#[derive(Properties, PartialEq)]
struct BeforeAfterProps {
    title: AttrValue,
    before: AttrValue,
    after: AttrValue,
    active: bool,
}

/// Pointer-driven comparison: the after image is clipped to the slider
/// position, expressed as a percentage of the container width.
#[function_component(BeforeAfterSlider)]
fn before_after_slider(props: &BeforeAfterProps) -> Html {
    let position = use_state(|| 50.0f64);
    let container_ref = use_node_ref();

    let update_position = {
        let position = position.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |client_x: f64| {
            if let Some(container) = container_ref.cast::<web_sys::HtmlElement>() {
                let rect = container.get_bounding_client_rect();
                if rect.width() > 0.0 {
                    let percentage = (client_x - rect.left()) / rect.width() * 100.0;
                    position.set(percentage.clamp(0.0, 100.0));
                }
            }
        })
    };

    let onmousemove = {
        let update_position = update_position.clone();
        Callback::from(move |e: MouseEvent| update_position.emit(e.client_x() as f64))
    };

    let ontouchmove = {
        let update_position = update_position.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                update_position.emit(touch.client_x() as f64);
            }
        })
    };

    html! {
        <div
            class={classes!("ba-slider", props.active.then_some("active"))}
            ref={container_ref}
            {onmousemove}
            {ontouchmove}
        >
            <div class="ba-before">
                <img src={props.before.clone()} alt={format!("Before - {}", props.title)} />
                <span class="ba-label">{"Before"}</span>
            </div>
            <div
                class="ba-after"
                style={format!("clip-path: inset(0 {}% 0 0);", 100.0 - *position)}
            >
                <img src={props.after.clone()} alt={format!("After - {}", props.title)} />
                <span class="ba-label right">{"After"}</span>
            </div>
            <div class="ba-handle" style={format!("left: {}%;", *position)}>
                <span></span>
            </div>
            <div class="ba-hint">{"Drag to compare"}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub on_book: Callback<()>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone());
    let active = use_state(|| 0usize);
    let open_treatment = use_state(|| None::<usize>);

    let prev = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            active.set((*active + CASES.len() - 1) % CASES.len());
        })
    };
    let next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            active.set((*active + 1) % CASES.len());
        })
    };

    let close_treatment = {
        let open_treatment = open_treatment.clone();
        Callback::from(move |_: ()| open_treatment.set(None))
    };

    let dots = (0..CASES.len()).map(|index| {
        let active_handle = active.clone();
        html! {
            <button
                key={index}
                class={classes!("gallery-dot", (index == *active).then_some("active"))}
                onclick={Callback::from(move |_| active_handle.set(index))}
                aria-label={format!("Go to slide {}", index + 1)}
            />
        }
    });

    let grid_items = CASES.iter().enumerate().map(|(index, case)| {
        let open_treatment = open_treatment.clone();
        html! {
            <div
                key={case.title}
                class="gallery-item"
                onclick={Callback::from(move |_| open_treatment.set(Some(index)))}
            >
                <div class="gallery-item-image">
                    <img src={case.thumb} alt={case.title} />
                    <div class="gallery-item-overlay">
                        <span>{"Treatment Details"}</span>
                    </div>
                </div>
                <h3>{case.title}</h3>
            </div>
        }
    });

    html! {
        <section id="gallery" class={classes!("gallery", revealed.then_some("visible"))} ref={section_ref}>
            <style>
                {r#".gallery { padding: 6rem 0; }
                .gallery-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .gallery-stage,
                .gallery-grid {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .gallery.visible .gallery-stage,
                .gallery.visible .gallery-grid {
                    opacity: 1;
                    transform: translateY(0);
                }
                .gallery.visible .gallery-grid { transition-delay: 0.2s; }
                .gallery-stage {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 3rem;
                }
                .gallery-nav {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 50%;
                    width: 44px;
                    height: 44px;
                    font-size: 1.2rem;
                    cursor: pointer;
                    color: var(--text);
                    flex-shrink: 0;
                }
                .gallery-nav:hover { border-color: var(--primary); color: var(--primary); }
                .gallery-viewport { flex: 1; position: relative; min-height: 320px; }
                .ba-slider {
                    position: absolute;
                    inset: 0;
                    border-radius: 14px;
                    overflow: hidden;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.5s ease;
                    cursor: col-resize;
                }
                .ba-slider.active { opacity: 1; pointer-events: auto; }
                .ba-before, .ba-after { position: absolute; inset: 0; }
                .ba-before img, .ba-after img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .ba-after { transition: clip-path 0.1s ease-out; }
                .ba-label {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    background: rgba(0, 0, 0, 0.55);
                    color: #fff;
                    font-size: 0.8rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                }
                .ba-label.right { left: auto; right: 1rem; }
                .ba-handle {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 2px;
                    background: #fff;
                    transform: translateX(-1px);
                }
                .ba-handle span {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 34px;
                    height: 34px;
                    border-radius: 50%;
                    background: #fff;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.25);
                }
                .ba-hint {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: rgba(0, 0, 0, 0.55);
                    color: #fff;
                    font-size: 0.8rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                }
                .gallery-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.25rem;
                }
                .gallery-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: var(--border);
                    cursor: pointer;
                    padding: 0;
                }
                .gallery-dot.active { background: var(--primary); }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .gallery-item { cursor: pointer; }
                .gallery-item-image {
                    position: relative;
                    border-radius: 12px;
                    overflow: hidden;
                    aspect-ratio: 4 / 3;
                }
                .gallery-item-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.4s ease;
                }
                .gallery-item:hover .gallery-item-image img { transform: scale(1.05); }
                .gallery-item-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(28, 124, 130, 0.7);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .gallery-item:hover .gallery-item-overlay { opacity: 1; }
                .gallery-item h3 {
                    font-size: 1rem;
                    margin: 0.75rem 0 0;
                    text-align: center;
                }
                @media (max-width: 900px) {
                    .gallery-grid { grid-template-columns: 1fr; }
                    .gallery-viewport { min-height: 240px; }
                }"#}
            </style>
            <div class="gallery-inner">
                <div class="section-header">
                    <h2>{"Before & After Gallery"}</h2>
                    <p>{"See the amazing transformations our patients have experienced"}</p>
                </div>

                <div class="gallery-stage">
                    <button class="gallery-nav" onclick={prev} aria-label="Previous image">{"‹"}</button>
                    <div class="gallery-viewport">
                        { for CASES.iter().enumerate().map(|(index, case)| html! {
                            <BeforeAfterSlider
                                key={case.title}
                                title={case.title}
                                before={case.before}
                                after={case.after}
                                active={index == *active}
                            />
                        }) }
                    </div>
                    <button class="gallery-nav" onclick={next} aria-label="Next image">{"›"}</button>
                </div>
                <div class="gallery-dots">
                    { for dots }
                </div>

                <div class="gallery-grid">
                    { for grid_items }
                </div>
            </div>

            <TreatmentModal
                treatment={*open_treatment}
                on_close={close_treatment}
                on_book={props.on_book.clone()}
            />
        </section>
    }
}
