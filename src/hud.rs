//! HUD sink contract
//!
//! The shell owns the HUD widgets; the simulation only reports values through
//! [`GameEvent`]s, which [`apply_events`] forwards here.

use crate::sim::{GameEvent, Outcome};

pub trait HudSink {
    /// Player health bar, in percent
    fn set_player_health(&mut self, percent: i32);
    /// Boss health bar, in percent
    fn set_boss_health(&mut self, percent: i32);
    /// Ammo counter text (`"current/size"`)
    fn set_ammo(&mut self, text: &str);
    /// Present the end-of-run message
    fn game_over(&mut self, outcome: Outcome);
    fn set_fps(&mut self, _fps: u32) {}
}

pub fn ammo_text(current: i32, size: i32) -> String {
    format!("{current}/{size}")
}

/// Forward HUD-relevant events in order; everything else is ignored
pub fn apply_events<H: HudSink + ?Sized>(hud: &mut H, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::PlayerHealth(health) => hud.set_player_health(*health),
            GameEvent::BossHealth(health) => hud.set_boss_health(*health),
            GameEvent::Ammo { current, size } => hud.set_ammo(&ammo_text(*current, *size)),
            GameEvent::GameOver(outcome) => hud.game_over(*outcome),
            GameEvent::Sound(_) | GameEvent::MinionsSpawned { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;

    #[derive(Default)]
    struct Log(Vec<String>);

    impl HudSink for Log {
        fn set_player_health(&mut self, percent: i32) {
            self.0.push(format!("player {percent}%"));
        }
        fn set_boss_health(&mut self, percent: i32) {
            self.0.push(format!("boss {percent}%"));
        }
        fn set_ammo(&mut self, text: &str) {
            self.0.push(format!("ammo {text}"));
        }
        fn game_over(&mut self, outcome: Outcome) {
            self.0.push(outcome.message().to_string());
        }
    }

    #[test]
    fn test_events_forwarded_in_order() {
        let mut hud = Log::default();
        apply_events(
            &mut hud,
            &[
                GameEvent::Ammo { current: 19, size: 20 },
                GameEvent::Sound(SoundEffect::Shoot),
                GameEvent::BossHealth(99),
                GameEvent::PlayerHealth(85),
                GameEvent::MinionsSpawned { requested: 3, placed: 3 },
                GameEvent::GameOver(Outcome::Lost),
            ],
        );
        assert_eq!(
            hud.0,
            vec![
                "ammo 19/20",
                "boss 99%",
                "player 85%",
                "YOU JUST LOST... TO GRAEM??? AHAHAHAHAHA",
            ]
        );
    }
}
