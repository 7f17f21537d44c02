//! Frontend Models
//!
//! Data structures matching backend records. Every record is
//! `#[serde(default)]` so a sparse backend document still deserializes.

use serde::{Deserialize, Serialize};

/// Personal info singleton shown on the About page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub headline: String,
    pub profile: String,
    pub skills: Vec<String>,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub photo: String,
}

impl PersonalInfo {
    /// Template content used when the backend has no record yet
    pub fn placeholder() -> Self {
        Self {
            name: "Votre Nom".to_string(),
            headline: "Étudiant(e) en [Votre Domaine d'Études]".to_string(),
            profile: "Étudiant(e) motivé(e) et passionné(e), je poursuis actuellement mes études \
                      en [Votre Domaine d'Études]. À travers mes stages, j'ai développé des \
                      compétences solides et une vision claire de mon avenir professionnel."
                .to_string(),
            skills: vec![
                "Compétence 1".to_string(),
                "Compétence 2".to_string(),
                "Compétence 3".to_string(),
                "Compétence 4".to_string(),
                "Compétence 5".to_string(),
            ],
            email: "votre.email@exemple.com".to_string(),
            phone: "+33 X XX XX XX XX".to_string(),
            linkedin: "/votre-profil".to_string(),
            photo: String::new(),
        }
    }
}

/// One work assignment inside a stage. Which extra block is rendered
/// depends on the mission's position on the page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Mission {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub points: Vec<String>,
    pub improvement: String,
    pub projects: String,
    pub images: Vec<String>,
}

/// A project entry of the second-year stage page, with its tool tags
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// One internship record, keyed by stage type ("stage1" / "stage2")
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StageRecord {
    pub stage_type: String,
    pub company: String,
    pub position: String,
    pub period: String,
    pub sector: String,
    pub description: String,
    pub missions: Vec<Mission>,
    pub tools: Vec<Tool>,
    pub skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub achievements: Vec<String>,
    pub summary: String,
    pub images: Vec<String>,
}

impl StageRecord {
    /// Template content used when the backend has no record for this stage
    pub fn placeholder(stage_type: &str) -> Self {
        let mission = |n: u32| Mission {
            title: format!("Mission {} - [Titre de votre mission]", n),
            description: "[Décrivez ici votre mission : le contexte, vos responsabilités, \
                          les défis rencontrés et les résultats obtenus.]"
                .to_string(),
            skills: vec![
                "Compétence 1".to_string(),
                "Compétence 2".to_string(),
                "Compétence 3".to_string(),
            ],
            points: vec![
                "Point important 1".to_string(),
                "Point important 2".to_string(),
                "Point important 3".to_string(),
            ],
            improvement: "XX%".to_string(),
            projects: "XX".to_string(),
            images: Vec::new(),
        };
        Self {
            stage_type: stage_type.to_string(),
            company: "[Nom de l'entreprise]".to_string(),
            position: "[Intitulé du poste]".to_string(),
            period: "[Date de début - Date de fin]".to_string(),
            sector: "[Secteur d'activité]".to_string(),
            description: "[Ajoutez ici une description de l'entreprise, son secteur d'activité, \
                          sa taille, ses valeurs, et le contexte dans lequel vous avez évolué \
                          pendant votre stage.]"
                .to_string(),
            missions: vec![mission(1), mission(2), mission(3)],
            tools: vec![
                Tool {
                    name: "Projet 1".to_string(),
                    description: "Description détaillée du projet principal réalisé pendant ce stage."
                        .to_string(),
                    tags: vec!["Outil 1".to_string(), "Outil 2".to_string()],
                },
                Tool {
                    name: "Projet 2".to_string(),
                    description: "Autre projet significatif et son impact sur l'entreprise."
                        .to_string(),
                    tags: vec!["Technologie A".to_string(), "Technologie B".to_string()],
                },
            ],
            skills: vec![
                "Compétence technique 1".to_string(),
                "Compétence technique 2".to_string(),
                "Compétence technique 3".to_string(),
            ],
            soft_skills: vec![
                "Communication".to_string(),
                "Travail en équipe".to_string(),
                "Adaptabilité".to_string(),
            ],
            achievements: Vec::new(),
            summary: "Ce stage m'a permis de découvrir le monde professionnel et de mettre en \
                      pratique mes connaissances théoriques."
                .to_string(),
            images: Vec::new(),
        }
    }
}

/// Free-text content block stored independently of stages ("conclusion", ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    pub section: String,
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
}

impl ContentSection {
    pub fn placeholder(section_id: &str) -> Self {
        Self {
            section: section_id.to_string(),
            title: "Conclusion & Perspectives".to_string(),
            content: "Ces deux années de stages m'ont permis de construire une expérience \
                      professionnelle solide et de développer une vision claire de mon avenir."
                .to_string(),
            images: Vec::new(),
        }
    }
}

/// Contact form payload posted from the About page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Transient toast notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_stage_document_deserializes_with_defaults() {
        let stage: StageRecord = serde_json::from_str(r#"{"stage_type":"stage1"}"#).unwrap();
        assert_eq!(stage.stage_type, "stage1");
        assert!(stage.company.is_empty());
        assert!(stage.missions.is_empty());
        assert!(stage.skills.is_empty());
    }

    #[test]
    fn empty_list_round_trips_as_empty_not_absent() {
        let mut info = PersonalInfo::placeholder();
        info.skills = vec![];
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["skills"], serde_json::json!([]));
        let back: PersonalInfo = serde_json::from_value(json).unwrap();
        assert!(back.skills.is_empty());
    }

    #[test]
    fn placeholder_keeps_template_identity() {
        assert_eq!(PersonalInfo::placeholder().name, "Votre Nom");
        let stage = StageRecord::placeholder("stage2");
        assert_eq!(stage.stage_type, "stage2");
        assert_eq!(stage.company, "[Nom de l'entreprise]");
        assert_eq!(stage.missions.len(), 3);
    }
}
