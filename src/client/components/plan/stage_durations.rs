use std::collections::HashMap;

use dioxus::prelude::*;

use crate::client::store::{dispatch, use_plan, PlanAction};
use crate::model::nutrition::Stage;
use crate::model::time::{format_duration, parse_duration_input, refresh_duration_text};

/// Duration inputs for every stage plus the total race time.
///
/// Partially-typed text stays visible in the field while the user types;
/// only text passing the `h:mm` / `mm` gate is committed to state, and an
/// invalid field reverts to the formatted current duration on focus loss.
#[component]
pub fn StageDurations() -> Element {
    let mut plan = use_plan();
    let stages = plan.read().stages.clone();
    let mut inputs = use_signal(|| {
        plan.peek()
            .stages
            .iter()
            .map(|s| (s.id, format_duration(s.duration)))
            .collect::<HashMap<i64, String>>()
    });

    // Durations are also editable from each StageCard; follow changes
    // committed there, and pick up any stage without a field yet.
    let stage_durations = use_memo(move || {
        plan.read()
            .stages
            .iter()
            .map(|s| (s.id, s.duration))
            .collect::<Vec<(i64, u32)>>()
    });
    use_effect(move || {
        for (stage_id, duration) in stage_durations() {
            let refreshed = inputs
                .peek()
                .get(&stage_id)
                .map_or(Some(format_duration(duration)), |text| {
                    refresh_duration_text(text, duration)
                });
            if let Some(text) = refreshed {
                inputs.write().insert(stage_id, text);
            }
        }
    });

    let total_minutes = stages
        .iter()
        .fold(0u32, |sum, s| sum.saturating_add(s.duration));
    let total_display = format_duration(total_minutes);

    rsx!(
        section { class: "w-full max-w-4xl flex flex-col gap-2",
            h2 { class: "text-xl font-semibold",
                "Race Stages"
            }
            ul { class: "flex flex-col gap-1",
                for stage in stages {
                    li { key: "{stage.id}", class: "flex items-center gap-2",
                        span { class: "w-32",
                            "{stage.name} Duration:"
                        }
                        input {
                            class: "input input-bordered input-sm w-20",
                            title: "Enter as h:mm or mm",
                            value: inputs.read().get(&stage.id).cloned().unwrap_or_default(),
                            oninput: {
                                let stage = stage.clone();
                                move |event: FormEvent| {
                                    let text = event.value();
                                    inputs.write().insert(stage.id, text.clone());
                                    if let Ok(minutes) = parse_duration_input(&text) {
                                        dispatch(
                                            &mut plan,
                                            PlanAction::UpdateStage(Stage {
                                                duration: minutes,
                                                ..stage.clone()
                                            }),
                                        );
                                    }
                                }
                            },
                            onblur: {
                                let stage_id = stage.id;
                                move |_| {
                                    let text = inputs
                                        .read()
                                        .get(&stage_id)
                                        .cloned()
                                        .unwrap_or_default();
                                    if parse_duration_input(&text).is_err() {
                                        let duration = plan
                                            .read()
                                            .stages
                                            .iter()
                                            .find(|s| s.id == stage_id)
                                            .map(|s| s.duration)
                                            .unwrap_or(0);
                                        inputs.write().insert(stage_id, format_duration(duration));
                                    }
                                }
                            },
                        }
                        span { class: "text-xs",
                            "(minutes: {stage.duration})"
                        }
                    }
                }
            }
            div {
                strong { "Total Race Time:" }
                " {total_display} ({total_minutes} min)"
            }
        }
    )
}
