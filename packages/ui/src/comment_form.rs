use api::Comment;
use dioxus::prelude::*;

use crate::context::use_api;
use crate::field::{field_error, FormMessage};
use crate::forms::{submit, validate_comment, FieldErrors, FormError};
use crate::guard::LOGIN_PATH;
use crate::triage::surface;

#[component]
pub fn CommentForm(project_id: i64, on_posted: EventHandler<Comment>) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut content = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| async move {
        if submitting() {
            return;
        }
        let client = api();
        let session = client.session().clone();
        let Some(user_id) = session.user_id() else {
            nav.replace(LOGIN_PATH);
            return;
        };
        submitting.set(true);
        message.set(None);
        let result = submit(validate_comment(&content(), project_id, user_id), move |body| async move {
            client.comments().create(&body).await
        })
        .await;
        submitting.set(false);
        match result {
            Ok(comment) => {
                errors.set(FieldErrors::new());
                content.set(String::new());
                on_posted.call(comment);
            }
            Err(FormError::Invalid(invalid)) => errors.set(invalid),
            Err(FormError::Api(err)) => message.set(surface(&session, nav, &err)),
        }
    };

    rsx! {
        div {
            class: "comment-form",
            textarea {
                rows: 2,
                placeholder: "Write a comment",
                value: content(),
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }
            {field_error(&errors.read(), "content")}
            FormMessage { message: message() }
            button {
                class: "primary",
                disabled: submitting(),
                onclick: handle_submit,
                if submitting() { "Posting..." } else { "Comment" }
            }
        }
    }
}
