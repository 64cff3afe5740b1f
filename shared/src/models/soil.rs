//! Qualitative soil observation models
//!
//! A farmer answers five multiple-choice questions about a soil sample. Each
//! answer maps to a fixed phrase and the phrases are joined into the
//! description string that is sent to the model.

use serde::{Deserialize, Serialize};

use crate::types::BilingualLabel;

/// One answer to a soil questionnaire question
pub trait ObservationChoice: Copy + Sized + 'static {
    /// Every answer, in the order the form shows them
    const ALL: [Self; 4];

    /// Stable identifier used in JSON payloads
    fn key(&self) -> &'static str;

    /// Phrase embedded in the soil description
    fn phrase(&self) -> &'static str;

    /// Form label in English and Punjabi
    fn label(&self) -> BilingualLabel;
}

/// How the soil feels in the hand
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Texture {
    #[default]
    Sandy,
    Silty,
    Clayey,
    Loamy,
}

impl ObservationChoice for Texture {
    const ALL: [Self; 4] = [Texture::Sandy, Texture::Silty, Texture::Clayey, Texture::Loamy];

    fn key(&self) -> &'static str {
        match self {
            Texture::Sandy => "sandy",
            Texture::Silty => "silty",
            Texture::Clayey => "clayey",
            Texture::Loamy => "loamy",
        }
    }

    fn phrase(&self) -> &'static str {
        match self {
            Texture::Sandy => "loose gritty sandy",
            Texture::Silty => "smooth silky fine silt",
            Texture::Clayey => "sticky plastic clay",
            Texture::Loamy => "mixed loam balanced",
        }
    }

    fn label(&self) -> BilingualLabel {
        match self {
            Texture::Sandy => BilingualLabel::new(
                "Loose and sandy (falls apart easily)",
                "ਢਿੱਲੀ ਅਤੇ ਰੇਤਲੀ (ਆਸਾਨੀ ਨਾਲ ਟੁੱਟ ਜਾਂਦੀ ਹੈ)",
            ),
            Texture::Silty => BilingualLabel::new(
                "Smooth like powder (soft, very fine)",
                "ਪਾਊਡਰ ਵਾਂਗ ਸਾਫ਼ (ਨਰਮ, ਬਹੁਤ ਬਰੀਕ)",
            ),
            Texture::Clayey => BilingualLabel::new(
                "Sticky when wet (forms a ball easily)",
                "ਗਿੱਲੀ ਹੋਣ 'ਤੇ ਚਿਪਚਿਪੀ (ਆਸਾਨੀ ਨਾਲ ਗੇਂਦ ਬਣਾਉਂਦੀ ਹੈ)",
            ),
            Texture::Loamy => BilingualLabel::new(
                "Mix of all (gritty + smooth + sticky)",
                "ਸਾਰੇ ਮਿਲੇ-ਜੁਲੇ (ਰੇਤਲਾ + ਸਾਫ਼ + ਚਿਪਚਿਪਾ)",
            ),
        }
    }
}

/// How wet the soil is right now
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Moisture {
    VeryWet,
    #[default]
    Moist,
    SlightlyDry,
    VeryDry,
}

impl ObservationChoice for Moisture {
    const ALL: [Self; 4] = [
        Moisture::VeryWet,
        Moisture::Moist,
        Moisture::SlightlyDry,
        Moisture::VeryDry,
    ];

    fn key(&self) -> &'static str {
        match self {
            Moisture::VeryWet => "very_wet",
            Moisture::Moist => "moist",
            Moisture::SlightlyDry => "slightly_dry",
            Moisture::VeryDry => "very_dry",
        }
    }

    fn phrase(&self) -> &'static str {
        match self {
            Moisture::VeryWet => "very wet waterlogged",
            Moisture::Moist => "moist damp",
            Moisture::SlightlyDry => "slightly dry friable",
            Moisture::VeryDry => "very dry dusty",
        }
    }

    fn label(&self) -> BilingualLabel {
        match self {
            Moisture::VeryWet => BilingualLabel::new(
                "Very wet (waterlogged, shiny)",
                "ਬਹੁਤ ਜ਼ਿਆਦਾ ਗਿੱਲੀ (ਪਾਣੀ ਨਾਲ ਭਰੀ ਹੋਈ, ਚਮਕਦਾਰ)",
            ),
            Moisture::Moist => BilingualLabel::new(
                "Moist (damp but not dripping)",
                "ਨਮੀ ਵਾਲੀ (ਭਿੱਜੀ ਪਰ ਟਪਕਦੀ ਨਹੀਂ)",
            ),
            Moisture::SlightlyDry => BilingualLabel::new(
                "Slightly dry (crumbles but holds shape)",
                "ਥੋੜ੍ਹੀ ਸੁੱਕੀ (ਟੁੱਟਦੀ ਹੈ ਪਰ ਆਕਾਰ ਬਣਾਈ ਰੱਖਦੀ ਹੈ)",
            ),
            Moisture::VeryDry => BilingualLabel::new(
                "Very dry (completely dusty)",
                "ਬਹੁਤ ਸੁੱਕੀ (ਪੂਰੀ ਤਰ੍ਹਾਂ ਧੂੜ ਵਾਲੀ)",
            ),
        }
    }
}

/// Soil color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SoilColor {
    #[default]
    Dark,
    Red,
    Yellowish,
    Grayish,
}

impl ObservationChoice for SoilColor {
    const ALL: [Self; 4] = [
        SoilColor::Dark,
        SoilColor::Red,
        SoilColor::Yellowish,
        SoilColor::Grayish,
    ];

    fn key(&self) -> &'static str {
        match self {
            SoilColor::Dark => "dark",
            SoilColor::Red => "red",
            SoilColor::Yellowish => "yellowish",
            SoilColor::Grayish => "grayish",
        }
    }

    fn phrase(&self) -> &'static str {
        match self {
            SoilColor::Dark => "dark brown black organic rich",
            SoilColor::Red => "red reddish-brown iron oxide",
            SoilColor::Yellowish => "yellowish light brown leached",
            SoilColor::Grayish => "grayish whitish poor drainage",
        }
    }

    fn label(&self) -> BilingualLabel {
        match self {
            SoilColor::Dark => BilingualLabel::new(
                "Dark brown / black (rich color)",
                "ਗੂੜ੍ਹਾ ਭੂਰਾ / ਕਾਲਾ (ਧਨਾਢ ਰੰਗ)",
            ),
            SoilColor::Red => BilingualLabel::new("Red or reddish-brown", "ਲਾਲ ਜਾਂ ਲਾਲ-ਭੂਰਾ"),
            SoilColor::Yellowish => BilingualLabel::new(
                "Yellowish or light brown",
                "ਪੀਲਾ ਜਿਹਾ ਜਾਂ ਹਲਕਾ ਭੂਰਾ",
            ),
            SoilColor::Grayish => BilingualLabel::new("Grayish / whitish", "ਧੂਸਰ ਜਾਂ ਚਿੱਟਾ"),
        }
    }
}

/// How hard the soil is to dig
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Hardness {
    VerySoft,
    #[default]
    Medium,
    Hard,
    VeryHard,
}

impl ObservationChoice for Hardness {
    const ALL: [Self; 4] = [
        Hardness::VerySoft,
        Hardness::Medium,
        Hardness::Hard,
        Hardness::VeryHard,
    ];

    fn key(&self) -> &'static str {
        match self {
            Hardness::VerySoft => "very_soft",
            Hardness::Medium => "medium",
            Hardness::Hard => "hard",
            Hardness::VeryHard => "very_hard",
        }
    }

    fn phrase(&self) -> &'static str {
        match self {
            Hardness::VerySoft => "very soft loose",
            Hardness::Medium => "medium firm",
            Hardness::Hard => "hard cloddy compacted",
            Hardness::VeryHard => "very hard rocky",
        }
    }

    fn label(&self) -> BilingualLabel {
        match self {
            Hardness::VerySoft => BilingualLabel::new(
                "Very soft (easy to dig by hand)",
                "ਬਹੁਤ ਨਰਮ (ਹੱਥ ਨਾਲ ਆਸਾਨੀ ਨਾਲ ਖੋਦੀ ਜਾ ਸਕਦੀ ਹੈ)",
            ),
            Hardness::Medium => BilingualLabel::new(
                "Medium (needs some effort)",
                "ਦਰਮਿਆਨਾ (ਥੋੜ੍ਹੀ ਮਿਹਨਤ ਲੱਗਦੀ ਹੈ)",
            ),
            Hardness::Hard => BilingualLabel::new(
                "Hard (needs tools, dry clods)",
                "ਸਖ਼ਤ (ਉਪਕਰਨਾਂ ਦੀ ਲੋੜ, ਸੁੱਕੇ ਗੱਠੇ)",
            ),
            Hardness::VeryHard => {
                BilingualLabel::new("Very hard / rocky", "ਬਹੁਤ ਸਖ਼ਤ / ਪੱਥਰੀਲੀ")
            }
        }
    }
}

/// What happens when water is poured on the soil
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Drainage {
    Fast,
    #[default]
    Slow,
    Pooling,
    Cracking,
}

impl ObservationChoice for Drainage {
    const ALL: [Self; 4] = [
        Drainage::Fast,
        Drainage::Slow,
        Drainage::Pooling,
        Drainage::Cracking,
    ];

    fn key(&self) -> &'static str {
        match self {
            Drainage::Fast => "fast",
            Drainage::Slow => "slow",
            Drainage::Pooling => "pooling",
            Drainage::Cracking => "cracking",
        }
    }

    fn phrase(&self) -> &'static str {
        match self {
            Drainage::Fast => "drains very fast porous",
            Drainage::Slow => "drains slowly moderate",
            Drainage::Pooling => "stays on top impermeable",
            Drainage::Cracking => "forms cracks shrink-swell",
        }
    }

    fn label(&self) -> BilingualLabel {
        match self {
            Drainage::Fast => BilingualLabel::new(
                "Drains very fast (water disappears quickly)",
                "ਬਹੁਤ ਤੇਜ਼ ਨਿਕਾਸ (ਪਾਣੀ ਜਲਦੀ ਗਾਇਬ ਹੋ ਜਾਂਦਾ ਹੈ)",
            ),
            Drainage::Slow => BilingualLabel::new(
                "Drains slowly (takes time but no standing water)",
                "ਹੌਲੀ ਨਿਕਾਸ (ਸਮਾਂ ਲੈਂਦਾ ਹੈ ਪਰ ਪਾਣੀ ਖੜਾ ਨਹੀਂ ਹੁੰਦਾ)",
            ),
            Drainage::Pooling => BilingualLabel::new(
                "Stays on top (water forms puddle)",
                "ਉੱਪਰ ਰਹਿੰਦਾ ਹੈ (ਪਾਣੀ ਜਮ ਜਾਂਦਾ ਹੈ)",
            ),
            Drainage::Cracking => BilingualLabel::new(
                "Forms cracks after drying",
                "ਸੁੱਕਣ ਤੋਂ ਬਾਅਦ ਦਰਾਰਾਂ ਬਣਦੀਆਂ ਹਨ",
            ),
        }
    }
}

/// A farmer's answers to the soil questionnaire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct SoilObservation {
    #[serde(default)]
    pub texture: Texture,
    #[serde(default)]
    pub moisture: Moisture,
    #[serde(default)]
    pub color: SoilColor,
    #[serde(default)]
    pub hardness: Hardness,
    #[serde(default)]
    pub drainage: Drainage,
}

impl SoilObservation {
    /// Serialize the answers into the description sent to the model
    pub fn describe(&self) -> String {
        format!(
            "Texture: {}; Moisture: {}; Color: {}; Hardness: {}; Drainage: {}",
            self.texture.phrase(),
            self.moisture.phrase(),
            self.color.phrase(),
            self.hardness.phrase(),
            self.drainage.phrase(),
        )
    }
}

/// A single selectable answer in the questionnaire
#[derive(Debug, Clone, Serialize)]
pub struct ObservationOption {
    pub key: &'static str,
    pub phrase: &'static str,
    pub label: BilingualLabel,
}

/// One questionnaire question with its answers and default selection
#[derive(Debug, Clone, Serialize)]
pub struct ObservationQuestion {
    pub field: &'static str,
    pub question: BilingualLabel,
    pub default: &'static str,
    pub options: Vec<ObservationOption>,
}

fn question<T: ObservationChoice + Default>(
    field: &'static str,
    question: BilingualLabel,
) -> ObservationQuestion {
    ObservationQuestion {
        field,
        question,
        default: T::default().key(),
        options: T::ALL
            .iter()
            .map(|choice| ObservationOption {
                key: choice.key(),
                phrase: choice.phrase(),
                label: choice.label(),
            })
            .collect(),
    }
}

/// The full soil questionnaire, in form order
pub fn soil_questionnaire() -> Vec<ObservationQuestion> {
    vec![
        question::<Texture>(
            "texture",
            BilingualLabel::new(
                "What does the soil feel like in your hand?",
                "ਤੁਹਾਡੇ ਹੱਥ ਵਿੱਚ ਮਿੱਟੀ ਕਿਵੇਂ ਮਹਿਸੂਸ ਹੁੰਦੀ ਹੈ?",
            ),
        ),
        question::<Moisture>(
            "moisture",
            BilingualLabel::new(
                "How wet is the soil right now?",
                "ਮਿੱਟੀ ਇਸ ਵੇਲੇ ਕਿੰਨੀ ਗਿੱਲੀ ਹੈ?",
            ),
        ),
        question::<SoilColor>(
            "color",
            BilingualLabel::new("What is the color of the soil?", "ਮਿੱਟੀ ਦਾ ਰੰਗ ਕੀ ਹੈ?"),
        ),
        question::<Hardness>(
            "hardness",
            BilingualLabel::new(
                "How hard is it to dig the soil?",
                "ਮਿੱਟੀ ਖੋਦਣ ਵਿੱਚ ਕਿੰਨੀ ਸਖ਼ਤ ਹੈ?",
            ),
        ),
        question::<Drainage>(
            "drainage",
            BilingualLabel::new(
                "When you pour water, what happens?",
                "ਜਦੋਂ ਤੁਸੀਂ ਪਾਣੀ ਪਾਉਂਦੇ ਹੋ, ਕੀ ਹੁੰਦਾ ਹੈ?",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_observation_description() {
        assert_eq!(
            SoilObservation::default().describe(),
            "Texture: loose gritty sandy; Moisture: moist damp; \
             Color: dark brown black organic rich; Hardness: medium firm; \
             Drainage: drains slowly moderate"
        );
    }

    #[test]
    fn test_observation_deserializes_snake_case_keys() {
        let observation: SoilObservation = serde_json::from_str(
            r#"{"texture":"clayey","moisture":"very_wet","color":"grayish","hardness":"very_hard","drainage":"cracking"}"#,
        )
        .unwrap();
        assert_eq!(observation.texture, Texture::Clayey);
        assert_eq!(observation.moisture, Moisture::VeryWet);
        assert_eq!(observation.drainage, Drainage::Cracking);
    }

    #[test]
    fn test_missing_answers_fall_back_to_form_defaults() {
        let observation: SoilObservation = serde_json::from_str(r#"{"color":"red"}"#).unwrap();
        assert_eq!(observation.texture, Texture::Sandy);
        assert_eq!(observation.color, SoilColor::Red);
        assert_eq!(observation.drainage, Drainage::Slow);
    }

    #[test]
    fn test_keys_match_serde_names() {
        for texture in Texture::ALL {
            assert_eq!(serde_json::to_value(texture).unwrap(), texture.key());
        }
        for moisture in Moisture::ALL {
            assert_eq!(serde_json::to_value(moisture).unwrap(), moisture.key());
        }
        for hardness in Hardness::ALL {
            assert_eq!(serde_json::to_value(hardness).unwrap(), hardness.key());
        }
    }

    #[test]
    fn test_questionnaire_shape() {
        let questions = soil_questionnaire();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.options.len() == 4));
        assert_eq!(questions[1].default, "moist");
        assert_eq!(questions[4].default, "slow");
    }
}
