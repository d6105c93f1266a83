use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_book: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let reduced_motion = prefers_reduced_motion();

    // Fade and drift the hero copy as the visitor scrolls past it. The
    // style is written straight onto the element so scrolling does not
    // re-render the section.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(content) = document.query_selector(".hero-content").ok().flatten() {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    let opacity = (1.0 - scroll_y / 600.0).max(0.0);
                    let shift = scroll_y * 0.3;
                    let _ = content.set_attribute(
                        "style",
                        &format!("opacity: {opacity}; transform: translateY({shift}px);"),
                    );
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <section id="home" class={classes!("hero", (!reduced_motion).then_some("animated"))}>
            <style>
                {r#".hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(160deg, var(--primary-soft) 0%, var(--surface) 55%);
                    padding: 7rem 0 4rem;
                }
                .hero-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    align-items: center;
                    gap: 3rem;
                    width: 100%;
                }
                .hero-content h1 {
                    margin: 0 0 1.25rem;
                    font-size: clamp(2.2rem, 5vw, 3.4rem);
                    line-height: 1.15;
                    color: var(--text);
                    animation: hero-enter 0.8s ease both 0.2s;
                }
                .hero-designation {
                    display: block;
                    font-size: 1rem;
                    font-weight: 500;
                    color: var(--primary-dark);
                    margin-top: 0.5rem;
                }
                .hero-tagline {
                    display: block;
                    font-size: 1.3rem;
                    color: var(--primary);
                    margin-top: 0.5rem;
                }
                .hero-description {
                    font-size: 1.05rem;
                    color: var(--text-muted);
                    max-width: 34rem;
                    margin-bottom: 2rem;
                    animation: hero-enter 0.8s ease both 0.4s;
                }
                .hero-cta {
                    background: var(--primary);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.9rem 2.2rem;
                    font: inherit;
                    font-size: 1.05rem;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 12px 30px rgba(44, 177, 188, 0.3);
                    transition: transform 0.25s ease, box-shadow 0.25s ease;
                    animation: hero-enter 0.8s ease both 0.6s;
                }
                .hero-cta:hover {
                    transform: translateY(-4px) scale(1.03);
                    box-shadow: 0 20px 40px rgba(44, 177, 188, 0.35);
                }
                .hero-image {
                    display: flex;
                    justify-content: center;
                    animation: hero-enter 1s ease both 0.3s;
                }
                .hero-image-frame {
                    width: min(340px, 80%);
                    aspect-ratio: 1;
                    border-radius: 50%;
                    background: var(--surface);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero-image-frame img {
                    width: 70%;
                    height: auto;
                }
                .hero.animated .hero-image-frame {
                    animation: hero-breathe 4s ease-in-out infinite;
                }
                .floating-elements { position: absolute; inset: 0; pointer-events: none; }
                .floating-element {
                    position: absolute;
                    border-radius: 50%;
                    background: var(--primary);
                    opacity: 0.12;
                }
                .floating-element.a { width: 46px; height: 46px; left: 8%; top: 22%; animation: hero-float 6s ease-in-out infinite; }
                .floating-element.b { width: 30px; height: 30px; right: 14%; top: 30%; background: var(--accent); animation: hero-float 8s ease-in-out infinite reverse; }
                .floating-element.c { width: 24px; height: 24px; left: 18%; bottom: 22%; background: var(--primary-dark); animation: hero-float 7s ease-in-out infinite; }
                .floating-element.d { width: 36px; height: 36px; right: 24%; bottom: 14%; animation: hero-float 9s ease-in-out infinite reverse; }
                @keyframes hero-enter {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes hero-float {
                    0%, 100% { transform: translateY(-14px); }
                    50% { transform: translateY(14px); }
                }
                @keyframes hero-breathe {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.03); }
                }
                @media (max-width: 900px) {
                    .hero-inner { grid-template-columns: 1fr; text-align: center; }
                    .hero-description { margin: 0 auto 2rem; }
                    .hero-image { order: -1; }
                }"#}
            </style>
            <div class="hero-inner">
                <div class="hero-content">
                    <h1>
                        {"Dr. Pratiksha Patil"}
                        <span class="hero-designation">
                            {"BDS, MDS – Periodontology & Oral Implantology"}
                        </span>
                        <span class="hero-tagline">{"Crafting Perfect Smiles"}</span>
                    </h1>
                    <p class="hero-description">
                        {"Experience world-class dental care in a comfortable, modern environment. \
                          From routine checkups to advanced cosmetic procedures, we're here to help \
                          you achieve the smile you've always dreamed of."}
                    </p>
                    <button class="hero-cta" onclick={book}>
                        {"Book Appointment"}
                    </button>
                </div>
                <div class="hero-image">
                    <div class="hero-image-frame">
                        <img src="/assets/dental.png" alt="Dental Care" />
                    </div>
                </div>
            </div>
            if !reduced_motion {
                <div class="floating-elements">
                    <div class="floating-element a"></div>
                    <div class="floating-element b"></div>
                    <div class="floating-element c"></div>
                    <div class="floating-element d"></div>
                </div>
            }
        </section>
    }
}
