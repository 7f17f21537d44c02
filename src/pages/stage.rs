//! Stage Page
//!
//! One component for both internship years, parameterized by stage type.
//! Owns the StageRecord and performs index-scoped merges for nested
//! mission and project edits: the touched sub-record is merged back into
//! its list, then the whole record is re-submitted to the gateway.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SectionKey};
use crate::components::{EditableImage, EditableList, EditableText, SaveCallback};
use crate::fields::merge_at;
use crate::models::{Mission, StageRecord, ToastKind, Tool};
use crate::store::{push_toast, use_app_store, AppStore};

/// Slots always offered for editing, even over a sparse backend record
const MISSION_SLOTS: usize = 3;
const TOOL_SLOTS: usize = 2;
const GALLERY_SLOTS: usize = 4;

type RecordSignal = ReadSignal<Option<StageRecord>>;

#[derive(Clone, Copy)]
struct StageSaver {
    record: RecordSignal,
    set_reload: WriteSignal<u32>,
    store: AppStore,
}

impl StageSaver {
    /// Persist the merged record, toast the outcome, refetch on success
    async fn persist(self, stage: StageRecord) -> bool {
        let key = SectionKey::Stage(stage.stage_type.clone());
        let payload = match serde_json::to_value(&stage) {
            Ok(payload) => payload,
            Err(_) => return false,
        };
        let ok = api::save(&key, payload).await;
        if ok {
            push_toast(&self.store, ToastKind::Success, "Modifications enregistrées");
            self.set_reload.try_update(|version| *version += 1);
        } else {
            push_toast(&self.store, ToastKind::Error, "Échec de l'enregistrement");
        }
        ok
    }

    fn snapshot(self) -> Option<StageRecord> {
        self.record.try_get_untracked().flatten()
    }

    fn text(self, apply: fn(&mut StageRecord, String)) -> SaveCallback<String> {
        SaveCallback::new(move |value: String| async move {
            let Some(mut stage) = self.snapshot() else { return false };
            apply(&mut stage, value);
            self.persist(stage).await
        })
    }

    fn list(self, apply: fn(&mut StageRecord, Vec<String>)) -> SaveCallback<Vec<String>> {
        SaveCallback::new(move |values: Vec<String>| async move {
            let Some(mut stage) = self.snapshot() else { return false };
            apply(&mut stage, values);
            self.persist(stage).await
        })
    }

    /// Save into a gallery slot, materializing it if the list is sparse
    fn gallery_image(self, index: usize) -> SaveCallback<String> {
        SaveCallback::new(move |value: String| async move {
            let Some(mut stage) = self.snapshot() else { return false };
            stage.images = merge_at(&stage.images, index, value);
            self.persist(stage).await
        })
    }

    fn mission_text(self, index: usize, apply: fn(&mut Mission, String)) -> SaveCallback<String> {
        SaveCallback::new(move |value: String| async move {
            let Some(mut stage) = self.snapshot() else { return false };
            let mut mission = stage.missions.get(index).cloned().unwrap_or_default();
            apply(&mut mission, value);
            stage.missions = merge_at(&stage.missions, index, mission);
            self.persist(stage).await
        })
    }

    fn mission_list(
        self,
        index: usize,
        apply: fn(&mut Mission, Vec<String>),
    ) -> SaveCallback<Vec<String>> {
        SaveCallback::new(move |values: Vec<String>| async move {
            let Some(mut stage) = self.snapshot() else { return false };
            let mut mission = stage.missions.get(index).cloned().unwrap_or_default();
            apply(&mut mission, values);
            stage.missions = merge_at(&stage.missions, index, mission);
            self.persist(stage).await
        })
    }

    /// Two-level merge: image slot inside a mission inside the record
    fn mission_image(self, index: usize, image_index: usize) -> SaveCallback<String> {
        SaveCallback::new(move |value: String| async move {
            let Some(mut stage) = self.snapshot() else { return false };
            let mut mission = stage.missions.get(index).cloned().unwrap_or_default();
            mission.images = merge_at(&mission.images, image_index, value);
            stage.missions = merge_at(&stage.missions, index, mission);
            self.persist(stage).await
        })
    }

    fn tool_text(self, index: usize, apply: fn(&mut Tool, String)) -> SaveCallback<String> {
        SaveCallback::new(move |value: String| async move {
            let Some(mut stage) = self.snapshot() else { return false };
            let mut tool = stage.tools.get(index).cloned().unwrap_or_default();
            apply(&mut tool, value);
            stage.tools = merge_at(&stage.tools, index, tool);
            self.persist(stage).await
        })
    }

    fn tool_tags(self, index: usize) -> SaveCallback<Vec<String>> {
        SaveCallback::new(move |values: Vec<String>| async move {
            let Some(mut stage) = self.snapshot() else { return false };
            let mut tool = stage.tools.get(index).cloned().unwrap_or_default();
            tool.tags = values;
            stage.tools = merge_at(&stage.tools, index, tool);
            self.persist(stage).await
        })
    }
}

#[component]
pub fn StagePage(stage_type: &'static str, title: &'static str) -> impl IntoView {
    let store = use_app_store();

    let (record, set_record) = signal::<Option<StageRecord>>(None);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::fetch_stage(stage_type).await {
                Ok(stage) => {
                    set_record.try_set(Some(stage));
                }
                Err(err) => {
                    web_sys::console::log_1(
                        &format!("[STAGE] fetch {} failed: {}", stage_type, err).into(),
                    );
                    if record.try_get_untracked() == Some(None) {
                        set_record.try_set(Some(StageRecord::placeholder(stage_type)));
                    }
                }
            }
        });
    });

    let saver = StageSaver { record, set_reload, store };

    let field = move |get: fn(&StageRecord) -> String| {
        Signal::derive(move || record.get().map(|stage| get(&stage)).unwrap_or_default())
    };
    let list_field = move |get: fn(&StageRecord) -> Vec<String>| {
        Signal::derive(move || record.get().map(|stage| get(&stage)).unwrap_or_default())
    };
    let mission_field = move |index: usize, get: fn(&Mission) -> String| {
        Signal::derive(move || {
            record
                .get()
                .and_then(|stage| stage.missions.get(index).map(get))
                .unwrap_or_default()
        })
    };
    let mission_list_field = move |index: usize, get: fn(&Mission) -> Vec<String>| {
        Signal::derive(move || {
            record
                .get()
                .and_then(|stage| stage.missions.get(index).map(get))
                .unwrap_or_default()
        })
    };
    let tool_field = move |index: usize, get: fn(&Tool) -> String| {
        Signal::derive(move || {
            record
                .get()
                .and_then(|stage| stage.tools.get(index).map(get))
                .unwrap_or_default()
        })
    };

    let mission_count =
        move || record.get().map(|stage| stage.missions.len().max(MISSION_SLOTS)).unwrap_or(0);
    let tool_count =
        move || record.get().map(|stage| stage.tools.len().max(TOOL_SLOTS)).unwrap_or(0);

    view! {
        <div class="page stage-page">
            <div class="stage-hero">
                <h1 class="page-title">{title}</h1>
            </div>

            <Show
                when=move || record.get().is_some()
                fallback=|| view! { <p class="loading">"Chargement..."</p> }
            >
                <div class="stage-sections">
                    // General info
                    <div class="card">
                        <h2 class="section-heading">"Informations générales"</h2>
                        <div class="info-grid">
                            <div class="info-cell">
                                <h3>"Entreprise"</h3>
                                <EditableText
                                    value=field(|stage| stage.company.clone())
                                    on_save=saver.text(|stage, v| stage.company = v)
                                    placeholder="[Nom de l'entreprise]"
                                />
                            </div>
                            <div class="info-cell">
                                <h3>"Période"</h3>
                                <EditableText
                                    value=field(|stage| stage.period.clone())
                                    on_save=saver.text(|stage, v| stage.period = v)
                                    placeholder="[Date de début - Date de fin]"
                                />
                            </div>
                            <div class="info-cell">
                                <h3>"Poste"</h3>
                                <EditableText
                                    value=field(|stage| stage.position.clone())
                                    on_save=saver.text(|stage, v| stage.position = v)
                                    placeholder="[Intitulé du poste]"
                                />
                            </div>
                            <div class="info-cell">
                                <h3>"Secteur"</h3>
                                <EditableText
                                    value=field(|stage| stage.sector.clone())
                                    on_save=saver.text(|stage, v| stage.sector = v)
                                    placeholder="[Secteur d'activité]"
                                />
                            </div>
                        </div>
                        <h3>"Description de l'entreprise"</h3>
                        <EditableText
                            value=field(|stage| stage.description.clone())
                            on_save=saver.text(|stage, v| stage.description = v)
                            placeholder="Décrivez l'entreprise..."
                            multiline=true
                        />
                    </div>

                    // Missions
                    <div class="card">
                        <h2 class="section-heading">"Missions réalisées"</h2>
                        <For
                            each=move || (0..mission_count())
                            key=|index| *index
                            children=move |index| {
                                view! {
                                    <div class="mission-card">
                                        <h3 class="mission-title">
                                            <EditableText
                                                value=mission_field(index, |m| m.title.clone())
                                                on_save=saver.mission_text(index, |m, v| m.title = v)
                                                placeholder="Titre de la mission"
                                            />
                                        </h3>
                                        <EditableText
                                            value=mission_field(index, |m| m.description.clone())
                                            on_save=saver.mission_text(index, |m, v| m.description = v)
                                            placeholder="Décrivez cette mission..."
                                            multiline=true
                                        />

                                        // Extra block varies by mission position, as on the
                                        // original pages: skills, key points, then metrics.
                                        {match index % MISSION_SLOTS {
                                            0 => view! {
                                                <div class="mission-extra">
                                                    <h4>"Compétences développées :"</h4>
                                                    <EditableList
                                                        items=mission_list_field(index, |m| m.skills.clone())
                                                        on_save=saver.mission_list(index, |m, v| m.skills = v)
                                                        placeholder="Compétence"
                                                    />
                                                </div>
                                            }
                                            .into_any(),
                                            1 => view! {
                                                <div class="mission-extra">
                                                    <h4>"Points clés :"</h4>
                                                    <EditableList
                                                        items=mission_list_field(index, |m| m.points.clone())
                                                        on_save=saver.mission_list(index, |m, v| m.points = v)
                                                        placeholder="Point important"
                                                    />
                                                </div>
                                            }
                                            .into_any(),
                                            _ => view! {
                                                <div class="mission-extra metrics">
                                                    <h4>"Résultats obtenus :"</h4>
                                                    <div class="metric">
                                                        <EditableText
                                                            value=mission_field(index, |m| m.improvement.clone())
                                                            on_save=saver.mission_text(index, |m, v| m.improvement = v)
                                                            placeholder="XX%"
                                                        />
                                                        <span class="metric-label">"Amélioration"</span>
                                                    </div>
                                                    <div class="metric">
                                                        <EditableText
                                                            value=mission_field(index, |m| m.projects.clone())
                                                            on_save=saver.mission_text(index, |m, v| m.projects = v)
                                                            placeholder="XX"
                                                        />
                                                        <span class="metric-label">"Projets"</span>
                                                    </div>
                                                </div>
                                            }
                                            .into_any(),
                                        }}

                                        <div class="mission-photos">
                                            <h4>"Photos de la mission :"</h4>
                                            {(0..3)
                                                .map(|image_index| {
                                                    let src = Signal::derive(move || {
                                                        record
                                                            .get()
                                                            .and_then(|stage| {
                                                                stage
                                                                    .missions
                                                                    .get(index)
                                                                    .and_then(|m| m.images.get(image_index).cloned())
                                                            })
                                                            .unwrap_or_default()
                                                    });
                                                    view! {
                                                        <EditableImage
                                                            src=src
                                                            on_save=saver.mission_image(index, image_index)
                                                            label="Photo de mission"
                                                            max_width=220.0
                                                            max_height=160.0
                                                        />
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>

                    // Projects and tools
                    <div class="card">
                        <h2 class="section-heading">"Projets principaux"</h2>
                        <For
                            each=move || (0..tool_count())
                            key=|index| *index
                            children=move |index| {
                                view! {
                                    <div class="tool-card">
                                        <h3>
                                            <EditableText
                                                value=tool_field(index, |tool| tool.name.clone())
                                                on_save=saver.tool_text(index, |tool, v| tool.name = v)
                                                placeholder="Nom du projet"
                                            />
                                        </h3>
                                        <EditableText
                                            value=tool_field(index, |tool| tool.description.clone())
                                            on_save=saver.tool_text(index, |tool, v| tool.description = v)
                                            placeholder="Description du projet..."
                                            multiline=true
                                        />
                                        <EditableList
                                            items=Signal::derive(move || {
                                                record
                                                    .get()
                                                    .and_then(|stage| stage.tools.get(index).map(|tool| tool.tags.clone()))
                                                    .unwrap_or_default()
                                            })
                                            on_save=saver.tool_tags(index)
                                            placeholder="Outil / technologie"
                                        />
                                    </div>
                                }
                            }
                        />
                    </div>

                    // Skills
                    <div class="card">
                        <h2 class="section-heading">"Compétences développées"</h2>
                        <div class="skills-columns">
                            <div>
                                <h3>"Compétences techniques"</h3>
                                <EditableList
                                    items=list_field(|stage| stage.skills.clone())
                                    on_save=saver.list(|stage, v| stage.skills = v)
                                    placeholder="Compétence technique"
                                />
                            </div>
                            <div>
                                <h3>"Compétences transversales"</h3>
                                <EditableList
                                    items=list_field(|stage| stage.soft_skills.clone())
                                    on_save=saver.list(|stage, v| stage.soft_skills = v)
                                    placeholder="Compétence transversale"
                                />
                            </div>
                            <div>
                                <h3>"Réalisations"</h3>
                                <EditableList
                                    items=list_field(|stage| stage.achievements.clone())
                                    on_save=saver.list(|stage, v| stage.achievements = v)
                                    placeholder="Réalisation"
                                />
                            </div>
                        </div>
                    </div>

                    // Summary
                    <div class="card">
                        <h2 class="section-heading">"Bilan du stage"</h2>
                        <EditableText
                            value=field(|stage| stage.summary.clone())
                            on_save=saver.text(|stage, v| stage.summary = v)
                            placeholder="Bilan de cette expérience..."
                            multiline=true
                        />
                    </div>

                    // Gallery
                    <div class="card">
                        <h2 class="section-heading">"Galerie"</h2>
                        <div class="gallery-grid">
                            {(0..GALLERY_SLOTS)
                                .map(|index| {
                                    let src = Signal::derive(move || {
                                        record
                                            .get()
                                            .and_then(|stage| stage.images.get(index).cloned())
                                            .unwrap_or_default()
                                    });
                                    view! {
                                        <EditableImage
                                            src=src
                                            on_save=saver.gallery_image(index)
                                            label="Photo de l'entreprise"
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
