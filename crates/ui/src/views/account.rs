use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn AccountView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = ctx.auth();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let auth_for_current = auth.clone();
    let mut user = use_signal(move || auth_for_current.current_user());

    if !auth.enabled() {
        return rsx! {
            div { class: "page account-page",
                header { class: "view-header",
                    h2 { class: "view-title", "Account" }
                }
                div { class: "view-divider" }
                p { class: "account-notice",
                    "Signing in is not configured. Practice works fully offline; an account only adds a remote backup of your scores."
                }
            }
        };
    }

    if let Some(current) = user() {
        let auth_logout = auth.clone();
        return rsx! {
            div { class: "page account-page",
                header { class: "view-header",
                    h2 { class: "view-title", "Account" }
                    p { class: "view-subtitle", "Signed in as {current.email()}" }
                }
                div { class: "view-divider" }
                p { class: "account-notice",
                    "Your scores are backed up to your account after every answer."
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        auth_logout.logout();
                        user.set(None);
                    },
                    "Log Out"
                }
            }
        };
    }

    let auth_login = auth.clone();
    let auth_register = auth;

    rsx! {
        div { class: "page account-page",
            header { class: "view-header",
                h2 { class: "view-title", "Account" }
                p { class: "view-subtitle", "Sign in to back up your streaks across devices." }
            }
            div { class: "view-divider" }

            div { class: "account-form",
                label { class: "account-label", "Email" }
                input {
                    class: "account-input",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{email()}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { class: "account-label", "Password" }
                input {
                    class: "account-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password()}",
                    oninput: move |evt| password.set(evt.value()),
                }

                if let Some(message) = error() {
                    p { class: "account-error", "{message}" }
                }

                div { class: "account-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: busy(),
                        onclick: move |_| {
                            let auth = auth_login.clone();
                            let email_value = email();
                            let password_value = password();
                            busy.set(true);
                            spawn(async move {
                                match auth.login(&email_value, &password_value).await {
                                    Ok(signed_in) => {
                                        error.set(None);
                                        user.set(Some(signed_in));
                                    }
                                    Err(err) => error.set(Some(err.to_string())),
                                }
                                busy.set(false);
                            });
                        },
                        "Log In"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: busy(),
                        onclick: move |_| {
                            let auth = auth_register.clone();
                            let email_value = email();
                            let password_value = password();
                            busy.set(true);
                            spawn(async move {
                                match auth.register(&email_value, &password_value).await {
                                    Ok(signed_in) => {
                                        error.set(None);
                                        user.set(Some(signed_in));
                                    }
                                    Err(err) => error.set(Some(err.to_string())),
                                }
                                busy.set(false);
                            });
                        },
                        "Register"
                    }
                }
            }
        }
    }
}
