use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::form_state::{encode_request, ContactFields, ContactForm, Field, FormAction, SubmitError, Submission};

/// Stand-in for posting the form: builds the request body and logs it.
fn deliver(fields: &ContactFields) -> Result<(), SubmitError> {
    let body = encode_request(fields)?;
    gloo_console::log!("Contact request:", body);
    Ok(())
}

#[derive(Properties, PartialEq)]
struct FieldRowProps {
    field: Field,
    label: &'static str,
    error: Option<String>,
    children: Children,
}

#[function_component]
fn FieldRow(props: &FieldRowProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.field.as_str()}>{props.label}</label>
            { for props.children.iter() }
            {
                if let Some(error) = &props.error {
                    html! { <p class="field-error">{error}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component]
pub fn ContactFormSection() -> Html {
    let form = use_reducer(ContactForm::default);

    // One timer per in-flight stage. Dropping the handle on state change or
    // unmount cancels whatever has not fired yet.
    {
        let submission = form.submission;
        let form = form.clone();
        use_effect_with_deps(
            move |submission: &Submission| {
                let dispatcher = form.dispatcher();
                let pending = submission.timer_ms().map(|delay| match submission {
                    Submission::Submitting => {
                        let fields = form.fields.clone();
                        Timeout::new(delay, move || {
                            dispatcher.dispatch(FormAction::Finish(deliver(&fields)));
                        })
                    }
                    _ => Timeout::new(delay, move || {
                        dispatcher.dispatch(FormAction::ResetFeedback);
                    }),
                });
                move || drop(pending)
            },
            submission,
        );
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Update(field, input.value()));
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Update(Field::Message, input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::Submit);
        })
    };

    let error_of = |field: Field| form.errors.get(field).map(|e| e.to_string());
    let input_class = |field: Field| classes!("form-input", form.errors.get(field).is_some().then_some("invalid-input"));
    let is_submitting = form.is_submitting();

    let contact_css = r#"
        .contact-section {
            max-width: 48rem;
            margin: 0 auto;
            padding: 1.5rem;
        }
        .contact-card {
            position: relative;
            backdrop-filter: blur(12px);
            background: linear-gradient(135deg, rgba(254, 255, 214, 0.8), rgba(254, 255, 214, 0.6));
            border-radius: 0.75rem;
            padding: 2rem;
            border: 1px solid rgba(255, 255, 255, 0.2);
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        }
        .contact-card h2 {
            font-size: 1.875rem;
            color: #1f2937;
        }
        .form-group {
            margin-bottom: 1.5rem;
        }
        .form-group label {
            display: block;
            font-size: 1.125rem;
            color: #374151;
            margin-bottom: 0.5rem;
        }
        .form-input {
            width: 100%;
            padding: 0.75rem 1rem;
            background: rgba(255, 255, 255, 0.7);
            border: 1px solid #d1d5db;
            border-radius: 0.5rem;
            transition: all 0.3s ease-in-out;
        }
        .form-input:focus {
            outline: none;
            box-shadow: 0 0 0 2px #fcff2e;
        }
        .invalid-input {
            border-color: #ef4444;
        }
        .field-error {
            margin-top: 0.25rem;
            color: #ef4444;
            font-size: 0.875rem;
        }
        .form-alert {
            padding: 0.75rem 1rem;
            border-radius: 0.25rem;
            margin-bottom: 1.5rem;
        }
        .form-alert.success {
            background: #dcfce7;
            border: 1px solid #4ade80;
            color: #15803d;
        }
        .form-alert.failure {
            background: #fee2e2;
            border: 1px solid #f87171;
            color: #b91c1c;
        }
        .submit-button {
            padding: 0.75rem 2rem;
            background: #fcff2e;
            color: #1f2937;
            font-weight: bold;
            border: none;
            border-radius: 0.5rem;
            cursor: pointer;
        }
        .submit-button:hover {
            background: #e4e729;
        }
        .submit-button:disabled {
            opacity: 0.7;
            cursor: not-allowed;
        }
        .spinner {
            display: inline-block;
            width: 1.25rem;
            height: 1.25rem;
            margin-left: 0.75rem;
            border: 3px solid rgba(31, 41, 55, 0.25);
            border-top-color: #1f2937;
            border-radius: 50%;
            animation: spin 1s linear infinite;
            vertical-align: middle;
        }
        @keyframes spin {
            to { transform: rotate(360deg); }
        }
    "#;

    html! {
        <section id="contact" class="contact-section" dir="rtl">
            <style>{contact_css}</style>
            <div class="contact-card">
                <h2>{"צור קשר"}</h2>
                <p>
                    {"יש לכם שאלות על השירותים שלנו במכון כושר ביתא? מעוניינים לשמוע עוד על התוכניות האישיות? מלאו את הטופס ונחזור אליכם בהקדם!"}
                </p>
                {
                    match form.submission {
                        Submission::Succeeded => html! {
                            <div class="form-alert success" role="alert">
                                <strong>{"תודה רבה! "}</strong>
                                <span>{"פנייתך התקבלה בהצלחה, ניצור איתך קשר בהקדם."}</span>
                            </div>
                        },
                        Submission::Failed => html! {
                            <div class="form-alert failure" role="alert">
                                <strong>{"אופס! "}</strong>
                                <span>{"אירעה שגיאה בשליחת הטופס. אנא נסו שנית מאוחר יותר."}</span>
                            </div>
                        },
                        Submission::Idle | Submission::Submitting => html! {},
                    }
                }
                <form {onsubmit} novalidate=true>
                    <FieldRow field={Field::Name} label="שם מלא" error={error_of(Field::Name)}>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            class={input_class(Field::Name)}
                            placeholder="הכנס את שמך המלא"
                            value={form.fields.get(Field::Name).to_owned()}
                            oninput={on_input(Field::Name)}
                        />
                    </FieldRow>
                    <FieldRow field={Field::Phone} label="טלפון" error={error_of(Field::Phone)}>
                        <input
                            type="tel"
                            id="phone"
                            name="phone"
                            dir="ltr"
                            class={input_class(Field::Phone)}
                            placeholder="הכנס את מספר הטלפון שלך"
                            value={form.fields.get(Field::Phone).to_owned()}
                            oninput={on_input(Field::Phone)}
                        />
                    </FieldRow>
                    <FieldRow field={Field::Email} label="אימייל" error={error_of(Field::Email)}>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            dir="ltr"
                            class={input_class(Field::Email)}
                            placeholder="הכנס את כתובת האימייל שלך"
                            value={form.fields.get(Field::Email).to_owned()}
                            oninput={on_input(Field::Email)}
                        />
                    </FieldRow>
                    <FieldRow field={Field::Message} label="הודעה" error={error_of(Field::Message)}>
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            class={input_class(Field::Message)}
                            placeholder="כתוב את הודעתך כאן..."
                            value={form.fields.get(Field::Message).to_owned()}
                            oninput={on_message_input}
                        />
                    </FieldRow>
                    <div class="form-actions">
                        <button type="submit" class="submit-button" disabled={is_submitting}>
                            {
                                if is_submitting {
                                    html! { <><span class="spinner"></span>{"שולח..."}</> }
                                } else {
                                    html! { {"שלח הודעה"} }
                                }
                            }
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
