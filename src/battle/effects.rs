//! Presentation requests emitted by the engine.
//!
//! The engine never plays anything itself; callers receive a list of
//! `EffectRequest`s per action and hand them to whatever renders the battle.

use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use super::types::CardCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum VisualCue {
    Beam,
    Projectile,
    Explosion,
    Slash,
    Sonic,
    Scan,
}

impl VisualCue {
    /// Pick the cue for a card template while it is being authored.
    pub fn for_card(card_id: &str, owner_hero_id: Option<&str>, category: CardCategory) -> Self {
        match owner_hero_id {
            Some("kayla") if card_id.contains("beam") => VisualCue::Beam,
            Some("kayla") if card_id.contains("disable") => VisualCue::Slash,
            Some("kayla") if card_id.contains("ult") => VisualCue::Explosion,
            Some("lina") => VisualCue::Sonic,
            Some("ella") if card_id.contains("scan") => VisualCue::Scan,
            Some(_) => VisualCue::Projectile,
            None if category == CardCategory::Destruction && card_id.contains("heavy") => {
                VisualCue::Explosion
            }
            None => VisualCue::Projectile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum SoundCue {
    KaylaShot,
    LinaCharm,
    EllaScan,
    Buff,
    Attack { heavy: bool },
    Defense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", tag = "kind", content = "cue")]
pub enum EffectRequest {
    Visual(VisualCue),
    Sound(SoundCue),
}

/// Requests for a card that has just been played.
pub fn card_effect_requests(
    visual: VisualCue,
    owner_hero_id: Option<&str>,
    category: CardCategory,
) -> Vec<EffectRequest> {
    let mut requests = Vec::new();
    match owner_hero_id {
        Some("kayla") => {
            requests.push(EffectRequest::Sound(SoundCue::KaylaShot));
            if visual == VisualCue::Explosion {
                requests.push(EffectRequest::Sound(SoundCue::Attack { heavy: true }));
            }
        }
        Some("lina") => requests.push(EffectRequest::Sound(SoundCue::LinaCharm)),
        Some("ella") => requests.push(EffectRequest::Sound(SoundCue::EllaScan)),
        _ => match category {
            CardCategory::Enhancement | CardCategory::Resource => {
                requests.push(EffectRequest::Sound(SoundCue::Buff))
            }
            CardCategory::Destruction => requests.push(EffectRequest::Sound(SoundCue::Attack {
                heavy: visual == VisualCue::Explosion,
            })),
            _ => requests.push(EffectRequest::Sound(SoundCue::Defense)),
        },
    }
    if matches!(category, CardCategory::Destruction | CardCategory::Control) {
        requests.push(EffectRequest::Visual(visual));
    }
    requests
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_follow_owner_and_id() {
        use CardCategory::*;
        assert_eq!(VisualCue::for_card("k_beam", Some("kayla"), Destruction), VisualCue::Beam);
        assert_eq!(VisualCue::for_card("k_disable", Some("kayla"), Destruction), VisualCue::Slash);
        assert_eq!(VisualCue::for_card("k_ult", Some("kayla"), Destruction), VisualCue::Explosion);
        assert_eq!(VisualCue::for_card("k_wep", Some("kayla"), Enhancement), VisualCue::Projectile);
        assert_eq!(VisualCue::for_card("l_whisper", Some("lina"), Destruction), VisualCue::Sonic);
        assert_eq!(VisualCue::for_card("e_scan", Some("ella"), Destruction), VisualCue::Scan);
        assert_eq!(VisualCue::for_card("n_heavy", None, Destruction), VisualCue::Explosion);
        assert_eq!(VisualCue::for_card("n_shot", None, Destruction), VisualCue::Projectile);
    }

    #[test]
    fn visuals_only_for_destruction_and_control() {
        let requests = card_effect_requests(VisualCue::Projectile, None, CardCategory::Enhancement);
        assert_eq!(requests, vec![EffectRequest::Sound(SoundCue::Buff)]);

        let requests = card_effect_requests(VisualCue::Explosion, Some("kayla"), CardCategory::Destruction);
        assert_eq!(
            requests,
            vec![
                EffectRequest::Sound(SoundCue::KaylaShot),
                EffectRequest::Sound(SoundCue::Attack { heavy: true }),
                EffectRequest::Visual(VisualCue::Explosion),
            ]
        );
    }
}
