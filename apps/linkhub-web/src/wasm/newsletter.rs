use gloo_net::http::Request;
use linkhub_core::{
    Completion, NewsletterForm, NewsletterSubmission, SubmissionOutcome, SubmitDecision,
};
use web_sys::{HtmlFormElement, HtmlInputElement};

use super::*;

pub(super) fn setup(config: &Rc<HubConfig>) -> HubResult<bool> {
    let Some(form) = query(&config.selectors.newsletter_form)? else {
        return Ok(false);
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| HubError::Js("newsletter form is not a <form> element".to_string()))?;

    let state = Rc::new(RefCell::new(NewsletterForm::default()));
    let submit_form = form.clone();
    let config = Rc::clone(config);
    listen(&form, "submit", move |event| {
        event.prevent_default();
        if let Err(error) = handle_submit(&submit_form, &state, &config) {
            report_error("newsletter submit", &error);
        }
    })?;
    Ok(true)
}

fn handle_submit(
    form: &HtmlFormElement,
    state: &Rc<RefCell<NewsletterForm>>,
    config: &Rc<HubConfig>,
) -> HubResult<()> {
    let email = form
        .query_selector(&config.selectors.email_input)
        .map_err(js_error)?
        .and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default();
    let button = form
        .query_selector(&config.selectors.newsletter_button)
        .map_err(js_error)?
        .ok_or_else(|| HubError::missing(config.selectors.newsletter_button.as_str()))?;

    let decision = state
        .borrow_mut()
        .submit(&email, &button.inner_html(), &config.messages);
    match decision {
        SubmitDecision::Rejected(rejection) => notification::show(&rejection, config),
        SubmitDecision::Busy => Ok(()),
        SubmitDecision::Accepted {
            email,
            submitting_label_html,
        } => {
            button.set_inner_html(&submitting_label_html);
            if let Err(error) = button.set_attribute("disabled", "") {
                if let Some(label) = state.borrow_mut().abandon() {
                    button.set_inner_html(&label);
                }
                return Err(js_error(error));
            }

            let form = form.clone();
            let state = Rc::clone(state);
            let config = Rc::clone(config);
            spawn_local(async move {
                let outcome = fulfil(&config.newsletter, &email).await;
                let completion = state.borrow_mut().complete(outcome, &config.messages);
                if let Some(completion) = completion {
                    apply_completion(&form, &button, completion, &config);
                }
            });
            Ok(())
        }
    }
}

async fn fulfil(submission: &NewsletterSubmission, email: &str) -> SubmissionOutcome {
    match submission {
        NewsletterSubmission::Simulated { delay_ms } => {
            sleep_ms(*delay_ms).await;
            SubmissionOutcome::Succeeded
        }
        NewsletterSubmission::Endpoint { url } => match post_signup(url, email).await {
            Ok(()) => SubmissionOutcome::Succeeded,
            Err(error) => SubmissionOutcome::Failed(error.to_string()),
        },
    }
}

async fn post_signup(url: &str, email: &str) -> HubResult<()> {
    let response = Request::post(url)
        .json(&serde_json::json!({ "email": email }))
        .map_err(|error| HubError::Network(error.to_string()))?
        .send()
        .await
        .map_err(|error| HubError::Network(error.to_string()))?;
    if response.ok() {
        return Ok(());
    }
    Err(HubError::Network(format!(
        "signup endpoint returned status {}",
        response.status()
    )))
}

fn apply_completion(
    form: &HtmlFormElement,
    button: &Element,
    completion: Completion,
    config: &HubConfig,
) {
    if let Err(error) = notification::show(&completion.notification, config) {
        report_error("newsletter notification", &error);
    }
    if completion.reset_form {
        form.reset();
    }
    button.set_inner_html(&completion.restore_label_html);
    let _ = button.remove_attribute("disabled");
    if let Some(event) = completion.event {
        analytics::track_event(&event);
    }
}
