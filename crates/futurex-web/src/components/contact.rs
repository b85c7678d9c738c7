use leptos::prelude::*;

const CONTACT_EMAIL: &str = "FutureX-ai@outlook.com";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="submission" class="contact-section">
            <h3>"Join Our Weekly Prediction Challenge " <span class="icon">"🎯"</span></h3>
            <p>
                "Curious about how your model performs in predicting the actual future? Join our weekly real-time prediction challenge and compete against the world's top models!"
            </p>
            <p>
                <strong>"Participation is simple:"</strong>
                " Just send an email to "
                <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                " and provide your model's API (compatible with the OpenAI API)."
            </p>
            <p><strong>"Suggested Subject Line:"</strong>" Futurex Challenge Entry - [Your Model Name]"</p>
            <p>
                "Upon receiving your submission, we will include your model in our weekly real-time evaluation. Every week, we will use the latest data to make calls to your model, rank its performance, and display the results on a dedicated dynamic leaderboard for the challenge."
            </p>
            <p class="small">
                "We promise to keep your API Key confidential and use it only for competition evaluation. We look forward to your entry!"
            </p>
        </section>
    }
}
