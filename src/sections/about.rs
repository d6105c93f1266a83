use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::reveal::use_reveal;

#[derive(Properties, PartialEq)]
struct CounterProps {
    end: u32,
    suffix: &'static str,
    label: &'static str,
    running: bool,
}

/// Counts up from zero once the section scrolls into view, stepping
/// every 30ms until the target is reached.
#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    let count = use_state_eq(|| 0u32);
    let end = props.end;

    {
        let count = count.clone();
        let current_count = *count;
        use_effect_with_deps(
            move |(running, current)| {
                let mut tick: Option<Timeout> = None;
                if *running && *current < end {
                    let step = (end / 50).max(1);
                    let current = *current;
                    tick = Some(Timeout::new(30, move || {
                        count.set((current + step).min(end));
                    }));
                }
                move || drop(tick)
            },
            (props.running, current_count),
        );
    }

    html! {
        <div class="counter">
            <span class="counter-number">{format!("{}{}", *count, props.suffix)}</span>
            <span class="counter-label">{props.label}</span>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone());

    html! {
        <section id="about" class={classes!("about", revealed.then_some("visible"))} ref={section_ref}>
            <style>
                {r#".about { padding: 6rem 0; }
                .about-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .about .section-header,
                .about-grid,
                .about-counters {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .about.visible .section-header,
                .about.visible .about-grid,
                .about.visible .about-counters {
                    opacity: 1;
                    transform: translateY(0);
                }
                .about.visible .about-grid { transition-delay: 0.2s; }
                .about.visible .about-counters { transition-delay: 0.4s; }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.4fr;
                    gap: 3rem;
                    align-items: start;
                    margin-top: 3rem;
                }
                .about-photo img {
                    width: 100%;
                    border-radius: 16px;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                }
                .about-text h3 { margin-top: 0; color: var(--primary-dark); }
                .about-text p { color: var(--text-muted); line-height: 1.7; }
                .about-credentials {
                    margin-top: 1.5rem;
                    background: var(--primary-soft);
                    border-radius: 12px;
                    padding: 1.25rem 1.5rem;
                }
                .about-credentials h4 { margin: 0 0 0.75rem; }
                .about-credentials ul { margin: 0; padding-left: 1.2rem; color: var(--text-muted); }
                .about-credentials li { margin-bottom: 0.4rem; }
                .about-counters {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-top: 3.5rem;
                }
                .counter {
                    text-align: center;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1.5rem 1rem;
                }
                .counter-number {
                    display: block;
                    font-size: 2rem;
                    font-weight: 700;
                    color: var(--primary);
                }
                .counter-label {
                    font-size: 0.9rem;
                    color: var(--text-muted);
                }
                @media (max-width: 900px) {
                    .about-grid { grid-template-columns: 1fr; }
                    .about-counters { grid-template-columns: repeat(2, 1fr); }
                }"#}
            </style>
            <div class="about-inner">
                <div class="section-header">
                    <h2>{"About Dr. Pratiksha Patil"}</h2>
                    <p>{"Dedicated to providing exceptional dental care with a personal touch"}</p>
                </div>

                <div class="about-grid">
                    <div class="about-photo">
                        <img src="/assets/pratiksha-patil.jpeg" alt="Dr. Pratiksha Patil" />
                    </div>
                    <div class="about-text">
                        <h3>{"Your Trusted Dental Care Partner"}</h3>
                        <p>
                            {"Dr. Pratiksha Patil is a board-certified periodontist and oral \
                              implantologist who has placed more than 75 implants over her career. \
                              She graduated with honors from the Maharashtra University of Health \
                              Sciences and completed advanced training in periodontology, cosmetic \
                              dentistry and implantology. Her expertise spans laser and surgical \
                              techniques, immediate implants, ridge augmentation, bone regeneration \
                              and esthetic dentistry, with a 98% patient satisfaction rate and \
                              awards for best paper and poster presentations in implant dentistry."}
                        </p>
                        <p>
                            {"Dr. Patil believes in creating a painless, comfortable and welcoming \
                              environment where patients feel at ease. Her approach combines \
                              cutting-edge technology with personalized care, ensuring each patient \
                              receives the attention and treatment they deserve."}
                        </p>
                        <div class="about-credentials">
                            <h4>{"Education & Certifications"}</h4>
                            <ul>
                                <li>{"BDS, Maharashtra University of Health Sciences"}</li>
                                <li>{"MDS in Periodontology, Maharashtra University of Health Sciences"}</li>
                                <li>{"Advanced training in Implantology"}</li>
                                <li>{"Member of the Indian Society of Periodontology"}</li>
                            </ul>
                        </div>
                    </div>
                </div>

                <div class="about-counters">
                    <Counter end={3} suffix="+" label="Years Experience" running={revealed} />
                    <Counter end={500} suffix="+" label="Patients Treated" running={revealed} />
                    <Counter end={10} suffix="+" label="Awards Won" running={revealed} />
                    <Counter end={98} suffix="%" label="Satisfaction Rate" running={revealed} />
                </div>
            </div>
        </section>
    }
}
