use web_sys::MouseEvent;
use yew::prelude::*;

pub struct TreatmentDetail {
    pub title: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub success_rate: &'static str,
    pub description: &'static str,
    pub images: &'static [(&'static str, &'static str)],
    pub benefits: &'static [&'static str],
    pub process: &'static [(&'static str, &'static str)],
    pub aftercare: &'static [&'static str],
}

pub const TREATMENTS: [TreatmentDetail; 3] = [
    TreatmentDetail {
        title: "Dental Implant Treatment",
        category: "Implantology",
        duration: "3-6 Months",
        success_rate: "98%",
        description: "Our advanced dental implant procedure provides a permanent solution for missing teeth. Using state-of-the-art technology and premium materials, we ensure optimal integration and long-lasting results.",
        images: &[
            ("/assets/ip3.jpeg", "Initial implant placement with precision guided surgery"),
            ("/assets/ip4.jpeg", "Final crown placement showing natural results"),
        ],
        benefits: &[
            "Permanent solution for missing teeth",
            "Preserves jawbone structure",
            "Natural look and feel",
            "No damage to adjacent teeth",
            "Improved chewing and speech",
            "98% success rate with proper care",
        ],
        process: &[
            ("Consultation & Planning", "Comprehensive examination and 3D imaging for precise treatment planning"),
            ("Implant Placement", "Surgical placement of titanium implant into the jawbone"),
            ("Healing Period", "3-6 months healing time for osseointegration"),
            ("Crown Placement", "Custom crown attached for natural appearance and function"),
        ],
        aftercare: &[
            "Regular brushing and flossing",
            "Routine dental checkups every 6 months",
            "Avoid hard foods initially",
            "Use antibacterial mouthwash",
            "Report any unusual symptoms immediately",
        ],
    },
    TreatmentDetail {
        title: "Periodontal Treatment",
        category: "Periodontology",
        duration: "2-4 Weeks",
        success_rate: "95%",
        description: "Comprehensive periodontal treatment to address gum disease and restore oral health. Our advanced techniques focus on eliminating infection, reducing inflammation, and promoting healthy gum regeneration.",
        images: &[
            ("/assets/ip1.jpeg", "Initial examination and assessment of gum condition"),
            ("/assets/ip2.jpeg", "Healthy gums after successful periodontal therapy"),
        ],
        benefits: &[
            "Eliminates gum disease and infection",
            "Prevents tooth loss",
            "Reduces gum inflammation and bleeding",
            "Improves overall oral health",
            "Fresh breath and confident smile",
            "Prevents systemic health complications",
        ],
        process: &[
            ("Comprehensive Evaluation", "Detailed examination of gums, measurement of pocket depths, and X-rays"),
            ("Deep Cleaning (Scaling)", "Removal of plaque and tartar from above and below the gum line"),
            ("Root Planing", "Smoothing of tooth roots to help gums reattach to teeth"),
            ("Follow-up Care", "Regular monitoring and maintenance to ensure continued gum health"),
        ],
        aftercare: &[
            "Gentle brushing with soft-bristled toothbrush",
            "Daily flossing and interdental cleaning",
            "Use prescribed antibacterial mouthwash",
            "Regular periodontal maintenance visits",
            "Avoid smoking and tobacco products",
            "Maintain a healthy diet low in sugar",
        ],
    },
    TreatmentDetail {
        title: "Tooth Restoration & Repair",
        category: "Restorative Dentistry",
        duration: "1-3 Visits",
        success_rate: "97%",
        description: "Advanced tooth restoration techniques to repair damaged, broken, or fallen teeth. We use modern materials and methods to restore both function and aesthetics, giving you back your confident smile.",
        images: &[
            ("/assets/ip5.jpeg", "Initial evaluation of the damaged tooth requiring restoration"),
            ("/assets/ip6.jpeg", "Successfully restored tooth with natural appearance and function"),
        ],
        benefits: &[
            "Restores damaged or broken teeth",
            "Natural appearance and color matching",
            "Preserves remaining healthy tooth structure",
            "Prevents further damage and decay",
            "Improved chewing and speaking ability",
            "Long-lasting and durable results",
        ],
        process: &[
            ("Damage Assessment", "Comprehensive evaluation of the damaged tooth and surrounding structures"),
            ("Treatment Planning", "Development of optimal restoration approach based on damage extent"),
            ("Tooth Preparation", "Careful preparation of the tooth structure for restoration placement"),
            ("Restoration Placement", "Precise placement and shaping of the restoration for perfect fit and appearance"),
        ],
        aftercare: &[
            "Avoid hard foods for 24-48 hours",
            "Maintain excellent oral hygiene",
            "Use fluoride toothpaste regularly",
            "Schedule regular dental checkups",
            "Report any sensitivity or discomfort",
            "Avoid grinding or clenching teeth",
        ],
    },
];

#[derive(Properties, PartialEq)]
pub struct TreatmentModalProps {
    /// Index into [`TREATMENTS`]; `None` keeps the modal closed.
    pub treatment: Option<usize>,
    pub on_close: Callback<()>,
    pub on_book: Callback<()>,
}

#[function_component(TreatmentModal)]
pub fn treatment_modal(props: &TreatmentModalProps) -> Html {
    let Some(treatment) = props.treatment.and_then(|index| TREATMENTS.get(index)) else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_footer = close.clone();
    let book = {
        let on_close = props.on_close.clone();
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            on_book.emit(());
        })
    };

    html! {
        <div class="treatment-overlay" onclick={close.clone()}>
            <style>
                {r#".treatment-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 400;
                    background: rgba(15, 30, 32, 0.55);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    animation: treatment-fade 0.3s ease;
                }
                @keyframes treatment-fade { from { opacity: 0; } to { opacity: 1; } }
                .treatment-content {
                    background: var(--surface);
                    border-radius: 16px;
                    width: 100%;
                    max-width: 760px;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 2rem;
                    position: relative;
                }
                .treatment-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.4rem;
                    cursor: pointer;
                    color: var(--text-muted);
                }
                .treatment-head h2 { margin: 0 0 0.25rem; color: var(--primary-dark); }
                .treatment-category {
                    display: inline-block;
                    background: var(--primary-soft);
                    color: var(--primary-dark);
                    font-size: 0.8rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                }
                .treatment-stats {
                    display: flex;
                    gap: 1.5rem;
                    margin: 1.25rem 0;
                    color: var(--text-muted);
                    font-size: 0.9rem;
                }
                .treatment-section { margin-bottom: 1.75rem; }
                .treatment-section h3 {
                    margin: 0 0 0.75rem;
                    font-size: 1.05rem;
                    color: var(--primary-dark);
                }
                .treatment-images {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .treatment-images img {
                    width: 100%;
                    border-radius: 10px;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                }
                .treatment-images figcaption {
                    font-size: 0.8rem;
                    color: var(--text-muted);
                    margin-top: 0.4rem;
                }
                .treatment-list { margin: 0; padding: 0; list-style: none; }
                .treatment-list li {
                    padding-left: 1.4rem;
                    position: relative;
                    margin-bottom: 0.4rem;
                    color: var(--text-muted);
                }
                .treatment-list li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: var(--primary);
                }
                .treatment-step {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 0.9rem;
                }
                .treatment-step-number {
                    width: 28px;
                    height: 28px;
                    border-radius: 50%;
                    background: var(--primary);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.85rem;
                    flex-shrink: 0;
                }
                .treatment-step h4 { margin: 0 0 0.2rem; font-size: 0.95rem; }
                .treatment-step p { margin: 0; color: var(--text-muted); font-size: 0.9rem; }
                .treatment-footer {
                    display: flex;
                    gap: 1rem;
                    justify-content: flex-end;
                    border-top: 1px solid var(--border);
                    padding-top: 1.25rem;
                }
                .treatment-footer .consult {
                    background: var(--primary);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.7rem 1.6rem;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                }
                .treatment-footer .dismiss {
                    background: none;
                    border: 1px solid var(--border);
                    border-radius: 999px;
                    padding: 0.7rem 1.6rem;
                    font: inherit;
                    cursor: pointer;
                    color: var(--text);
                }
                @media (max-width: 640px) {
                    .treatment-images { grid-template-columns: 1fr; }
                }"#}
            </style>
            <div class="treatment-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="treatment-close" onclick={close} aria-label="Close">{"✕"}</button>

                <div class="treatment-head">
                    <h2>{treatment.title}</h2>
                    <span class="treatment-category">{treatment.category}</span>
                </div>

                <div class="treatment-stats">
                    <span>{format!("Duration: {}", treatment.duration)}</span>
                    <span>{format!("Success Rate: {}", treatment.success_rate)}</span>
                </div>

                <div class="treatment-section">
                    <h3>{"Treatment Overview"}</h3>
                    <p>{treatment.description}</p>
                </div>

                <div class="treatment-section">
                    <h3>{"Procedure Images"}</h3>
                    <div class="treatment-images">
                        { for treatment.images.iter().map(|(src, caption)| html! {
                            <figure key={*src}>
                                <img src={*src} alt={*caption} />
                                <figcaption>{*caption}</figcaption>
                            </figure>
                        }) }
                    </div>
                </div>

                <div class="treatment-section">
                    <h3>{"Treatment Benefits"}</h3>
                    <ul class="treatment-list">
                        { for treatment.benefits.iter().map(|benefit| html! {
                            <li key={*benefit}>{*benefit}</li>
                        }) }
                    </ul>
                </div>

                <div class="treatment-section">
                    <h3>{"Treatment Process"}</h3>
                    { for treatment.process.iter().enumerate().map(|(index, (title, description))| html! {
                        <div class="treatment-step" key={*title}>
                            <div class="treatment-step-number">{index + 1}</div>
                            <div>
                                <h4>{*title}</h4>
                                <p>{*description}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="treatment-section">
                    <h3>{"Post-Treatment Care"}</h3>
                    <ul class="treatment-list">
                        { for treatment.aftercare.iter().map(|care| html! {
                            <li key={*care}>{*care}</li>
                        }) }
                    </ul>
                </div>

                <div class="treatment-footer">
                    <button class="consult" onclick={book}>{"Schedule Consultation"}</button>
                    <button class="dismiss" onclick={close_footer}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
