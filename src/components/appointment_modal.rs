//! Appointment Modal Component
//!
//! Booking form posted to `/appointments`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use studio_core::copy;
use studio_core::form::{
    AppointmentForm, FormField, SubmitFailure, BUDGET_RANGES, PREFERRED_TIMES, PROJECT_TYPES,
    SERVICE_TYPES,
};

use crate::api;
use crate::context::use_app_context;
use crate::dom;

fn select_options(choices: &'static [(&'static str, &'static str)]) -> impl IntoView {
    choices
        .iter()
        .map(|&(value, label)| view! { <option value=value>{label}</option> })
        .collect_view()
}

/// Appointment form in a modal overlay
#[component]
pub fn AppointmentModal() -> impl IntoView {
    let ctx = use_app_context();

    let form = RwSignal::new(AppointmentForm::default());
    let (submitting, set_submitting) = signal(false);

    let value = move |field: FormField| form.with(|f| f.value(field).to_string());
    let set = move |field: FormField, input: String| form.update(|f| f.set(field, input));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = match form.with_untracked(AppointmentForm::to_request) {
            Ok(request) => request,
            Err(err) => {
                dom::alert(&SubmitFailure::Invalid(err).alert_text());
                return;
            }
        };

        set_submitting.set(true);
        let config = ctx.config();
        spawn_local(async move {
            match api::create_appointment(&config, &request).await {
                Ok(()) => {
                    log::info!("appointment submitted");
                    dom::alert(copy::APPOINTMENT_SUBMITTED);
                    ctx.finish_appointment(form);
                }
                Err(err) => {
                    log::error!("提交预约失败: {err}");
                    dom::alert(&SubmitFailure::from(err).alert_text());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Show when=move || ctx.appointment_open.get()>
            <div id="appointmentModal" class="modal" on:click=move |_| ctx.close_appointment()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" title="关闭" on:click=move |_| ctx.close_appointment()>
                        "×"
                    </button>
                    <h2>"预约免费设计咨询"</h2>

                    <form id="appointmentForm" on:submit=submit>
                        <div class="form-group">
                            <label for="clientName">"姓名 *"</label>
                            <input
                                type="text"
                                id="clientName"
                                required
                                prop:value=move || value(FormField::ClientName)
                                on:input=move |ev| set(FormField::ClientName, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="clientPhone">"电话 *"</label>
                            <input
                                type="tel"
                                id="clientPhone"
                                required
                                prop:value=move || value(FormField::ClientPhone)
                                on:input=move |ev| set(FormField::ClientPhone, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="clientEmail">"邮箱"</label>
                            <input
                                type="email"
                                id="clientEmail"
                                prop:value=move || value(FormField::ClientEmail)
                                on:input=move |ev| set(FormField::ClientEmail, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="serviceType">"服务类型"</label>
                                <select
                                    id="serviceType"
                                    prop:value=move || value(FormField::ServiceType)
                                    on:change=move |ev| set(FormField::ServiceType, event_target_value(&ev))
                                >
                                    {select_options(SERVICE_TYPES)}
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="projectType">"项目类型"</label>
                                <select
                                    id="projectType"
                                    prop:value=move || value(FormField::ProjectType)
                                    on:change=move |ev| set(FormField::ProjectType, event_target_value(&ev))
                                >
                                    {select_options(PROJECT_TYPES)}
                                </select>
                            </div>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="budgetRange">"预算"</label>
                                <select
                                    id="budgetRange"
                                    prop:value=move || value(FormField::BudgetRange)
                                    on:change=move |ev| set(FormField::BudgetRange, event_target_value(&ev))
                                >
                                    {select_options(BUDGET_RANGES)}
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="preferredDate">"期望日期"</label>
                                <input
                                    type="date"
                                    id="preferredDate"
                                    prop:value=move || value(FormField::PreferredDate)
                                    on:input=move |ev| set(FormField::PreferredDate, event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label for="preferredTime">"期望时段"</label>
                                <select
                                    id="preferredTime"
                                    prop:value=move || value(FormField::PreferredTime)
                                    on:change=move |ev| set(FormField::PreferredTime, event_target_value(&ev))
                                >
                                    {select_options(PREFERRED_TIMES)}
                                </select>
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="message">"需求描述"</label>
                            <textarea
                                id="message"
                                rows="4"
                                prop:value=move || value(FormField::Message)
                                on:input=move |ev| set(FormField::Message, event_target_value(&ev))
                            ></textarea>
                        </div>

                        <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "提交中..." } else { "提交预约" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
