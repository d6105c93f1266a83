use yew::prelude::*;

use crate::components::reveal::use_reveal;

struct Achievement {
    title: &'static str,
    image: &'static str,
    description: &'static str,
}

const ACHIEVEMENTS: [Achievement; 6] = [
    Achievement {
        title: "Professional Excellence",
        image: "/assets/achivements1.jpeg",
        description: "Recognition for outstanding dental practice and patient care",
    },
    Achievement {
        title: "Clinical Achievement",
        image: "/assets/achivements2.jpeg",
        description: "Excellence in clinical procedures and treatment outcomes",
    },
    Achievement {
        title: "Medical Honor",
        image: "/assets/achivement3.jpeg",
        description: "Distinguished achievement in dental medicine and research",
    },
    Achievement {
        title: "Practice Excellence",
        image: "/assets/achivement4.jpeg",
        description: "Outstanding contribution to dental healthcare community",
    },
    Achievement {
        title: "Leadership Recognition",
        image: "/assets/achivement5.jpeg",
        description: "Leadership excellence in dental practice management and innovation",
    },
    Achievement {
        title: "Professional Certification",
        image: "/assets/achivement6.jpeg",
        description: "Advanced certification and specialized training in dental procedures",
    },
];

const STATS: [(&str, &str); 3] = [
    ("3+", "Publications"),
    ("1", "Research Grant"),
    ("20+", "Workshops Attended"),
];

#[function_component(Achievements)]
pub fn achievements() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone());

    let cards = ACHIEVEMENTS.iter().enumerate().map(|(index, achievement)| {
        html! {
            <div
                key={achievement.title}
                class="achievement-card"
                style={format!("transition-delay: {}ms", index * 120)}
            >
                <div class="achievement-image">
                    <img src={achievement.image} alt={achievement.title} />
                </div>
                <div class="achievement-body">
                    <h3>{achievement.title}</h3>
                    <p>{achievement.description}</p>
                </div>
            </div>
        }
    });

    html! {
        <section
            id="achievements"
            class={classes!("achievements", revealed.then_some("visible"))}
            ref={section_ref}
        >
            <style>
                {r#".achievements {
                    padding: 6rem 0;
                    background: var(--surface-alt);
                }
                .achievements-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .achievements-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .achievement-card {
                    background: var(--surface);
                    border-radius: 14px;
                    overflow: hidden;
                    border: 1px solid var(--border);
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .achievements.visible .achievement-card {
                    opacity: 1;
                    transform: translateY(0);
                }
                .achievement-card:hover { transform: translateY(-6px); }
                .achievement-image {
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                }
                .achievement-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .achievement-body { padding: 1.25rem; }
                .achievement-body h3 { margin: 0 0 0.5rem; font-size: 1.05rem; }
                .achievement-body p { margin: 0; color: var(--text-muted); font-size: 0.9rem; }
                .achievements-stats {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                    margin-top: 3rem;
                }
                .achievements-stats .stat { text-align: center; }
                .achievements-stats .stat-number {
                    display: block;
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: var(--primary);
                }
                .achievements-stats .stat-label { color: var(--text-muted); font-size: 0.9rem; }
                @media (max-width: 900px) {
                    .achievements-grid { grid-template-columns: 1fr; }
                    .achievements-stats { flex-direction: column; gap: 1.5rem; }
                }"#}
            </style>
            <div class="achievements-inner">
                <div class="section-header">
                    <h2>{"Our Achievements"}</h2>
                    <p>{"Recognition and awards that reflect our commitment to excellence in dental care"}</p>
                </div>

                <div class="achievements-grid">
                    { for cards }
                </div>

                <div class="achievements-stats">
                    { for STATS.iter().map(|(number, label)| html! {
                        <div class="stat" key={*label}>
                            <span class="stat-number">{*number}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
