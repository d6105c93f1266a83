use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::use_reveal;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Sayli Kulkarni",
        role: "Patient",
        quote: "Dr. Patil transformed my smile completely. The entire experience was comfortable and professional. I couldn't be happier with the results!",
        rating: 5,
    },
    Testimonial {
        name: "Malavika Yadav",
        role: "Patient",
        quote: "After years of being self-conscious about my teeth, Dr. Patil gave me the confidence to smile again. Her attention to detail is incredible.",
        rating: 5,
    },
    Testimonial {
        name: "Eshaan Patel",
        role: "Patient",
        quote: "The best dental experience I've ever had. Dr. Patil and her team are amazing. They made me feel comfortable throughout the entire process.",
        rating: 5,
    },
    Testimonial {
        name: "Dhruvi Desai",
        role: "Patient",
        quote: "Professional, caring, and exceptional results. Dr. Patil exceeded all my expectations. I highly recommend her to anyone looking for quality dental care.",
        rating: 5,
    },
    Testimonial {
        name: "Leela Patil",
        role: "Patient",
        quote: "From the moment I walked in, I felt welcomed and cared for. Dr. Pratiksha's expertise and gentle approach made all the difference in my treatment.",
        rating: 5,
    },
];

const STATS: [(&str, &str); 3] = [
    ("5000+", "Happy Patients"),
    ("98%", "Satisfaction Rate"),
    ("15+", "Years Experience"),
];

const AUTOPLAY_MS: u32 = 5_000;
const RESUME_MS: u32 = 3_000;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone());
    let current = use_state(|| 0usize);
    let autoplay = use_state_eq(|| true);
    // Pending "resume autoplay" timer after a manual selection.
    let resume_timer = use_mut_ref(|| None::<Timeout>);

    // Advance every few seconds; rescheduling on each index change keeps
    // the closure's index current, and dropping the handle on cleanup
    // stops the carousel when autoplay pauses or the view unmounts.
    {
        let current_handle = current.clone();
        use_effect_with_deps(
            move |(autoplay, index)| {
                let mut advance: Option<Timeout> = None;
                if *autoplay {
                    let index = *index;
                    advance = Some(Timeout::new(AUTOPLAY_MS, move || {
                        current_handle.set((index + 1) % TESTIMONIALS.len());
                    }));
                }
                move || drop(advance)
            },
            (*autoplay, *current),
        );
    }

    let pause_then_resume = {
        let autoplay = autoplay.clone();
        let resume_timer = resume_timer.clone();
        Callback::from(move |_: ()| {
            autoplay.set(false);
            let autoplay = autoplay.clone();
            *resume_timer.borrow_mut() = Some(Timeout::new(RESUME_MS, move || {
                autoplay.set(true);
            }));
        })
    };

    let prev = {
        let current = current.clone();
        let pause_then_resume = pause_then_resume.clone();
        Callback::from(move |_: MouseEvent| {
            current.set((*current + TESTIMONIALS.len() - 1) % TESTIMONIALS.len());
            pause_then_resume.emit(());
        })
    };
    let next = {
        let current = current.clone();
        let pause_then_resume = pause_then_resume.clone();
        Callback::from(move |_: MouseEvent| {
            current.set((*current + 1) % TESTIMONIALS.len());
            pause_then_resume.emit(());
        })
    };

    let onmouseenter = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| autoplay.set(false))
    };
    let onmouseleave = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| autoplay.set(true))
    };

    let testimonial = &TESTIMONIALS[*current];
    let initial = testimonial.name.chars().next().unwrap_or('?');
    let stars = "★".repeat(testimonial.rating);

    let dots = (0..TESTIMONIALS.len()).map(|index| {
        let current = current.clone();
        let pause_then_resume = pause_then_resume.clone();
        html! {
            <button
                key={index}
                class={classes!("testimonial-dot", (index == *current).then_some("active"))}
                onclick={Callback::from(move |_| {
                    current.set(index);
                    pause_then_resume.emit(());
                })}
                aria-label={format!("Go to testimonial {}", index + 1)}
            />
        }
    });

    html! {
        <section
            id="testimonials"
            class={classes!("testimonials", revealed.then_some("visible"))}
            ref={section_ref}
        >
            <style>
                {r#".testimonials { padding: 6rem 0; }
                .testimonials-inner {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .testimonial-carousel,
                .testimonials-stats {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .testimonials.visible .testimonial-carousel,
                .testimonials.visible .testimonials-stats {
                    opacity: 1;
                    transform: translateY(0);
                }
                .testimonials.visible .testimonials-stats { transition-delay: 0.2s; }
                .testimonial-carousel {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 3rem;
                }
                .testimonial-nav {
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
                .testimonial-nav:hover { border-color: var(--primary); color: var(--primary); }
                .testimonial-card {
                    flex: 1;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    padding: 2rem;
                    text-align: center;
                    animation: testimonial-in 0.5s ease;
                }
                @keyframes testimonial-in {
                    from { opacity: 0; transform: translateX(40px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .testimonial-quote {
                    font-size: 1.05rem;
                    line-height: 1.7;
                    color: var(--text);
                    margin: 0 0 1rem;
                }
                .testimonial-rating { color: var(--accent); letter-spacing: 0.2rem; }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1.25rem;
                }
                .testimonial-avatar {
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    background: var(--primary-soft);
                    color: var(--primary-dark);
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .testimonial-author h4 { margin: 0; font-size: 0.95rem; }
                .testimonial-author span { color: var(--text-muted); font-size: 0.8rem; }
                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.25rem;
                }
                .testimonial-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: var(--border);
                    cursor: pointer;
                    padding: 0;
                }
                .testimonial-dot.active { background: var(--primary); }
                .testimonials-stats {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                    margin-top: 3rem;
                }
                .testimonials-stats .stat { text-align: center; }
                .testimonials-stats h3 {
                    margin: 0;
                    font-size: 1.8rem;
                    color: var(--primary);
                }
                .testimonials-stats p { margin: 0.25rem 0 0; color: var(--text-muted); }
                @media (max-width: 640px) {
                    .testimonials-stats { flex-direction: column; gap: 1.25rem; }
                }"#}
            </style>
            <div class="testimonials-inner">
                <div class="section-header">
                    <h2>{"What Our Patients Say"}</h2>
                    <p>{"Real stories from real patients who have transformed their smiles"}</p>
                </div>

                <div class="testimonial-carousel" {onmouseenter} {onmouseleave}>
                    <button class="testimonial-nav" onclick={prev} aria-label="Previous testimonial">{"‹"}</button>
                    <div class="testimonial-card" key={*current}>
                        <p class="testimonial-quote">{testimonial.quote}</p>
                        <div class="testimonial-rating">
                            {stars.clone()}
                        </div>
                        <div class="testimonial-author">
                            <div class="testimonial-avatar">{initial.to_string()}</div>
                            <div>
                                <h4>{testimonial.name}</h4>
                                <span>{testimonial.role}</span>
                            </div>
                        </div>
                    </div>
                    <button class="testimonial-nav" onclick={next} aria-label="Next testimonial">{"›"}</button>
                </div>

                <div class="testimonial-dots">
                    { for dots }
                </div>

                <div class="testimonials-stats">
                    { for STATS.iter().map(|(number, label)| html! {
                        <div class="stat" key={*label}>
                            <h3>{*number}</h3>
                            <p>{*label}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
