use yew::prelude::*;

/// Full-screen brand splash shown while the page settles. The parent
/// owns the dismissal timer.
#[function_component(Preloader)]
pub fn preloader() -> Html {
    html! {
        <div class="preloader">
            <style>
                {r#".preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--surface);
                }
                .preloader-content { text-align: center; }
                .preloader-tooth {
                    width: 72px;
                    height: 72px;
                    margin: 0 auto 1.25rem;
                    animation: preloader-spin 2s linear infinite;
                }
                .preloader-content h2 {
                    margin: 0 0 0.25rem;
                    color: var(--primary-dark);
                }
                .preloader-content p {
                    margin: 0;
                    color: var(--text-muted);
                }
                @keyframes preloader-spin {
                    to { transform: rotate(360deg); }
                }"#}
            </style>
            <div class="preloader-content">
                <img class="preloader-tooth" src="/assets/dental.png" alt="Dental Care" />
                <h2>{"Dr. Pratiksha Patil"}</h2>
                <p>{"Crafting Perfect Smiles"}</p>
            </div>
        </div>
    }
}
