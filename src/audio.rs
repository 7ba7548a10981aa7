//! Tone effects
//!
//! Collisions request piano-key tones; a sampler lets through at most the
//! newest request per window so bursts don't stack up. Playback goes through
//! the Web Audio API in the browser.

use crate::consts::BEEP_SAMPLE_MS;

/// Frequency (Hz) of a piano key index, A4 = key 49 = 440 Hz
pub fn key_frequency(key: u8) -> f32 {
    440.0 * 2f32.powf((f32::from(key) - 49.0) / 12.0)
}

/// Something that can sound a tone
pub trait TonePlayer {
    fn play(&mut self, key: u8);
}

/// Keeps only the newest request per sampling window
#[derive(Debug, Clone)]
pub struct ToneSampler {
    period_ms: f64,
    next_due: Option<f64>,
    pending: Option<u8>,
}

impl Default for ToneSampler {
    fn default() -> Self {
        Self::new(BEEP_SAMPLE_MS)
    }
}

impl ToneSampler {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            next_due: None,
            pending: None,
        }
    }

    /// Queue a tone, replacing any request not yet let through
    pub fn request(&mut self, key: u8) {
        self.pending = Some(key);
    }

    /// Close the current window if it has elapsed. The first poll only opens
    /// the first window.
    pub fn poll(&mut self, now_ms: f64) -> Option<u8> {
        let due = *self.next_due.get_or_insert(now_ms + self.period_ms);
        if now_ms < due {
            return None;
        }

        let elapsed = ((now_ms - due) / self.period_ms).floor() + 1.0;
        self.next_due = Some(due + elapsed * self.period_ms);
        self.pending.take()
    }
}

/// Sampler in front of a player
pub struct Beeper<P: TonePlayer> {
    sampler: ToneSampler,
    player: P,
}

impl<P: TonePlayer> Beeper<P> {
    pub fn new(player: P) -> Self {
        Self {
            sampler: ToneSampler::default(),
            player,
        }
    }

    pub fn request(&mut self, key: u8) {
        self.sampler.request(key);
    }

    /// Play whatever the sampler lets through
    pub fn poll(&mut self, now_ms: f64) -> Option<u8> {
        let key = self.sampler.poll(now_ms)?;
        self.player.play(key);
        Some(key)
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}

/// Records played keys instead of sounding them
#[derive(Debug, Clone, Default)]
pub struct ToneLog {
    pub played: Vec<u8>,
}

impl TonePlayer for ToneLog {
    fn play(&mut self, key: u8) {
        log::debug!("tone {} ({:.1} Hz)", key, key_frequency(key));
        self.played.push(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebTonePlayer;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

    use super::{TonePlayer, key_frequency};
    use crate::consts::TONE_DURATION_SECS;
    use crate::settings::Settings;

    /// Square-wave beeper on a shared `AudioContext`
    pub struct WebTonePlayer {
        ctx: Option<AudioContext>,
        /// Zero when muted
        volume: f32,
    }

    impl WebTonePlayer {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        fn create_osc(ctx: &AudioContext, freq: f32) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(OscillatorType::Square);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }

    impl TonePlayer for WebTonePlayer {
        fn play(&mut self, key: u8) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            if ctx.state() == AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let Some((osc, gain)) = Self::create_osc(ctx, key_frequency(key)) else {
                return;
            };
            let t = ctx.current_time();

            // Square waves are loud
            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            osc.start().ok();
            osc.stop_with_when(t + TONE_DURATION_SECS).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_frequency() {
        assert!((key_frequency(49) - 440.0).abs() < 1e-3);
        assert!((key_frequency(61) - 880.0).abs() < 1e-2);
        assert!((key_frequency(37) - 220.0).abs() < 1e-2);
        assert!(key_frequency(28) < key_frequency(52));
    }

    #[test]
    fn test_first_poll_opens_window() {
        let mut sampler = ToneSampler::new(100.0);
        sampler.request(40);
        assert_eq!(sampler.poll(0.0), None);
        assert_eq!(sampler.poll(99.0), None);
        assert_eq!(sampler.poll(100.0), Some(40));
    }

    #[test]
    fn test_newest_request_wins() {
        let mut sampler = ToneSampler::new(100.0);
        sampler.poll(0.0);
        sampler.request(40);
        sampler.request(45);
        sampler.request(50);
        assert_eq!(sampler.poll(100.0), Some(50));
        // Nothing new in the next window
        assert_eq!(sampler.poll(200.0), None);
    }

    #[test]
    fn test_late_poll_skips_whole_windows() {
        let mut sampler = ToneSampler::new(100.0);
        sampler.poll(0.0);
        sampler.request(40);
        assert_eq!(sampler.poll(350.0), Some(40));

        sampler.request(45);
        assert_eq!(sampler.poll(399.0), None);
        assert_eq!(sampler.poll(400.0), Some(45));
    }

    #[test]
    fn test_beeper_plays_sampled_keys() {
        let mut beeper = Beeper::new(ToneLog::default());
        beeper.poll(0.0);
        beeper.request(40);
        beeper.request(47);
        assert_eq!(beeper.poll(50.0), None);
        assert_eq!(beeper.poll(100.0), Some(47));
        beeper.request(28);
        beeper.poll(200.0);
        assert_eq!(beeper.player().played, vec![47, 28]);
    }
}
