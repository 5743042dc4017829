//! Assign Patient Modal Component
//!
//! Collects patient name and urgency for an available bed. Nothing is sent
//! until both fields validate; field errors clear as the user edits.

use bed_lifecycle::validation::validate_assign;
use bed_lifecycle::{AssignPatientRequest, AssignValidation, Bed, UrgencyLevel};
use leptos::prelude::*;

/// Assign dialog, open while `bed` holds a bed
#[component]
pub fn AssignPatientModal(
    bed: RwSignal<Option<Bed>>,
    #[prop(into)] on_submit: Callback<(Bed, AssignPatientRequest)>,
) -> impl IntoView {
    let (patient_name, set_patient_name) = signal(String::new());
    let (urgency, set_urgency) = signal::<Option<UrgencyLevel>>(None);
    let (errors, set_errors) = signal(AssignValidation::default());

    // Reset form and close
    let close = move || {
        set_patient_name.set(String::new());
        set_urgency.set(None);
        set_errors.set(AssignValidation::default());
        bed.set(None);
    };

    let submit = move || {
        let Some(target) = bed.get_untracked() else { return };
        match validate_assign(&patient_name.get_untracked(), urgency.get_untracked()) {
            Ok(request) => {
                on_submit.run((target, request));
                close();
            }
            Err(validation) => set_errors.set(validation),
        }
    };

    let title = move || {
        bed.with(|bed| {
            bed.as_ref()
                .map(|bed| format!("Assign Patient to {}", bed.bed_number))
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || bed.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">{title}</h2>

                    // Patient name
                    <div class="form-field">
                        <label for="patient-name">"Patient Name *"</label>
                        <input
                            id="patient-name"
                            type="text"
                            placeholder="Enter patient name"
                            class=move || if errors.with(|e| e.name.is_some()) { "input invalid" } else { "input" }
                            prop:value=move || patient_name.get()
                            on:input=move |ev| {
                                set_patient_name.set(event_target_value(&ev));
                                set_errors.update(|e| e.name = None);
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    submit();
                                }
                            }
                        />
                        {move || errors.with(|e| e.name).map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

                    // Urgency level
                    <div class="form-field">
                        <label for="urgency-level">"Urgency Level *"</label>
                        <select
                            id="urgency-level"
                            class=move || if errors.with(|e| e.urgency.is_some()) { "input invalid" } else { "input" }
                            prop:value=move || urgency.get().map(|u| u.as_str()).unwrap_or("")
                            on:change=move |ev| {
                                set_urgency.set(event_target_value(&ev).parse::<UrgencyLevel>().ok());
                                set_errors.update(|e| e.urgency = None);
                            }
                        >
                            <option value="" disabled=true>"Select urgency level"</option>
                            {UrgencyLevel::ALL.into_iter().map(|level| view! {
                                <option value=level.as_str()>{level.label()}</option>
                            }).collect_view()}
                        </select>
                        {move || errors.with(|e| e.urgency).map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

                    <div class="modal-footer">
                        <button type="button" class="btn outline" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="button" class="btn primary" on:click=move |_| submit()>
                            "Assign Patient"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
