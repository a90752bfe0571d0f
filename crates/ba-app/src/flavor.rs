//! Texte décoratif « brainrot ». Écrit sur stderr, jamais dans l'art rendu.

use ba_core::config::{BrainrotLevel, ConvertConfig};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

static MILD: &[&str] = &[
    "no cap this is pretty good",
    "this hits different ngl",
    "periodt bestie this works",
    "W conversion fr",
    "this is giving art energy",
    "lowkey this is clean tho",
    "not me getting emotional over ASCII",
];

static MEDIUM: &[&str] = &[
    "no cap this is bussin fr fr",
    "absolutely sending me to the shadow realm",
    "this ASCII hits harder than my Wi-Fi",
    "POV: you're witnessing peak sigma art",
    "this is giving main character energy",
    "caught lacking without proper ASCII",
    "mewing so hard at this masterpiece",
    "Ohio final boss energy right here",
    "this is making me question reality",
    "gyatt damn this goes hard",
];

static MAXIMUM: &[&str] = &[
    "this goes harder than my ex's departure",
    "this is so skibidi ohio rizz maximum overdrive",
    "fanum tax on my ASCII skills (I'm deceased)",
    "W conversion + ratio + you fell off + L + bozo",
    "absolutely obliterating the competition rn",
    "this ASCII is making me transcend reality",
    "I'm literally crying and shaking rn this is so fire",
    "someone call the police this is too good to be legal",
    "my brain has ascended to another dimension",
    "GYATT DAYUM this is absolutely sending me to the backrooms",
    "bro really said let me cook and then proceeded to DEMOLISH the kitchen",
    "this ASCII art just performed surgery on my dopamine receptors",
    "not the ASCII art having more rizz than me 💀💀💀",
    "this image conversion just hit different than my dad with the milk",
    "POV: you're the final boss of graphic design and you don't even know it",
    "this is so fire the smoke detectors in Ohio started crying",
    "breaking: local person converts image, accidentally creates new form of art",
    "this ASCII just called me poor in 47 different languages",
    "bro really woke up and chose VIOLENCE against pixels",
];

static GIGACHAD: &[&str] = &[
    "BREAKING: Scientists baffled as ASCII art achieves sentience",
    "this conversion just solved world hunger and cured my depression simultaneously",
    "NASA wants to know your location after this absolute UNIT of a conversion",
    "this ASCII art just filed a restraining order against the Mona Lisa",
    "POV: Picasso's ghost just asked for your autograph",
    "this image conversion just made me renounce my atheism",
    "the art museum called, they want to replace everything with this",
    "this ASCII just convinced my therapist to get therapy",
    "breaking news: local ASCII art too powerful, reality.exe has stopped working",
    "this conversion is so good it made my ancestors proud",
];

static QUOTES: &[&str] = &[
    "💪 SIGMA GRINDSET: Convert pixels, acquire ASCII 💪",
    "🔥 REMEMBER: You're not just converting images, you're converting SOULS 🔥",
    "💯 TODAY'S AFFIRMATION: I am the main character of image processing 💯",
    "⚡ BREAKING: You just became 10x more based ⚡",
    "🎯 MINDSET: Every pixel is a stepping stone to greatness 🎯",
    "🚀 FUN FACT: This ASCII art has more personality than most people 🚀",
    "💀 REALITY CHECK: You're literally too powerful right now 💀",
];

static EVENTS: &[&str] = &[
    "🚨 OHIO ALERT: Reality distortion detected 🚨",
    "📢 BREAKING: You just gained +100 rizz points 📢",
    "⚠️ WARNING: Sigma energy levels reaching maximum capacity ⚠️",
    "🎪 RANDOM EVENT: Skibidi toilet has entered the chat 🎪",
    "🌟 ACHIEVEMENT UNLOCKED: Professional Pixel Destroyer 🌟",
    "💥 PLOT TWIST: The ASCII was the friends we made along the way 💥",
    "🎭 RARE ENCOUNTER: Wild Gigachad appeared! 🎭",
    "🎲 RNG BLESSED: Your conversion luck is through the roof 🎲",
];

pub const BANNER: &str = "🚀 GEN-Z ASCII CONVERTER ACTIVATED 🚀";
pub const FAILURE_QUIP: &str = "💀 This is not very cash money 💀";

/// Reaction lines for a level; empty for `Off`.
#[must_use]
pub fn reactions(level: BrainrotLevel) -> &'static [&'static str] {
    match level {
        BrainrotLevel::Off => &[],
        BrainrotLevel::Mild => MILD,
        BrainrotLevel::Medium => MEDIUM,
        BrainrotLevel::Maximum => MAXIMUM,
        BrainrotLevel::Gigachad => GIGACHAD,
    }
}

/// Sélectionne les lignes décoratives. Chaque méthode retourne `None`
/// (ou rien) quand le texte est désactivé.
pub struct Flavor {
    enabled: bool,
    silent: bool,
    level: BrainrotLevel,
    rng: StdRng,
}

impl Flavor {
    #[must_use]
    pub fn new(config: &ConvertConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic selection, for tests.
    #[must_use]
    pub fn seeded(config: &ConvertConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &ConvertConfig, rng: StdRng) -> Self {
        Self {
            enabled: config.flavor_enabled(),
            silent: config.silent,
            level: config.brainrot,
            rng,
        }
    }

    #[must_use]
    pub fn banner(&self) -> Option<&'static str> {
        self.enabled.then_some(BANNER)
    }

    /// A random reaction at `level`, prefixed with a speech bubble.
    pub fn reaction(&mut self, level: BrainrotLevel) -> Option<String> {
        if !self.enabled {
            return None;
        }
        reactions(level)
            .choose(&mut self.rng)
            .map(|line| format!("💬 {line}"))
    }

    /// Reaction at the configured level.
    pub fn configured_reaction(&mut self) -> Option<String> {
        self.reaction(self.level)
    }

    /// Une citation, une fois sur trois.
    pub fn motivational_quote(&mut self) -> Option<&'static str> {
        if !self.enabled || !self.rng.random_ratio(1, 3) {
            return None;
        }
        QUOTES.choose(&mut self.rng).copied()
    }

    /// Un événement aléatoire, une fois sur dix.
    pub fn random_event(&mut self) -> Option<&'static str> {
        if !self.enabled || !self.rng.random_ratio(1, 10) {
            return None;
        }
        EVENTS.choose(&mut self.rng).copied()
    }

    /// Shown whenever not silent, whatever the level.
    #[must_use]
    pub fn gif_announcement(&self, frames: usize) -> Option<String> {
        (!self.silent).then(|| format!("🎬 Converting GIF with {frames} frames 🎬"))
    }

    /// Closing lines after a successful conversion.
    pub fn finale(&mut self) -> Vec<String> {
        if !self.enabled {
            return Vec::new();
        }
        let mut lines = Vec::with_capacity(3);
        if self.level == BrainrotLevel::Gigachad {
            lines.extend(self.reaction(BrainrotLevel::Gigachad));
            lines.push("🏆 GIGACHAD MODE COMPLETE - REALITY HAS BEEN SUCCESSFULLY HACKED 🏆".into());
            lines.push("👑 YOU ARE NOW THE CEO OF EXISTENCE 👑".into());
        } else {
            lines.extend(self.reaction(BrainrotLevel::Maximum));
            lines.push("✨ CONVERSION COMPLETE - YOU'RE NOW THE MAIN CHARACTER ✨".into());
        }
        lines
    }

    #[must_use]
    pub fn failure_quip(&self) -> Option<&'static str> {
        self.enabled.then_some(FAILURE_QUIP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: BrainrotLevel, silent: bool) -> ConvertConfig {
        ConvertConfig {
            brainrot: level,
            silent,
            ..ConvertConfig::default()
        }
    }

    #[test]
    fn off_level_is_mute() {
        let mut flavor = Flavor::seeded(&config(BrainrotLevel::Off, false), 7);
        assert!(flavor.banner().is_none());
        assert!(flavor.configured_reaction().is_none());
        assert!(flavor.finale().is_empty());
        assert!(flavor.failure_quip().is_none());
        for _ in 0..100 {
            assert!(flavor.motivational_quote().is_none());
            assert!(flavor.random_event().is_none());
        }
        assert!(flavor.gif_announcement(3).is_some());
    }

    #[test]
    fn silent_mutes_everything() {
        let mut flavor = Flavor::seeded(&config(BrainrotLevel::Gigachad, true), 7);
        assert!(flavor.banner().is_none());
        assert!(flavor.finale().is_empty());
        assert!(flavor.gif_announcement(3).is_none());
    }

    #[test]
    fn reaction_comes_from_level_table() {
        let mut flavor = Flavor::seeded(&config(BrainrotLevel::Mild, false), 42);
        for _ in 0..20 {
            let line = flavor.configured_reaction().unwrap();
            let body = line.strip_prefix("💬 ").unwrap();
            assert!(MILD.contains(&body));
        }
    }

    #[test]
    fn gigachad_finale_has_its_own_ending() {
        let mut flavor = Flavor::seeded(&config(BrainrotLevel::Gigachad, false), 1);
        let lines = flavor.finale();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("CEO OF EXISTENCE"));

        let mut flavor = Flavor::seeded(&config(BrainrotLevel::Medium, false), 1);
        let lines = flavor.finale();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("MAIN CHARACTER"));
    }

    #[test]
    fn random_lines_fire_sometimes() {
        let mut flavor = Flavor::seeded(&config(BrainrotLevel::Medium, false), 99);
        let quotes = (0..300).filter(|_| flavor.motivational_quote().is_some()).count();
        let events = (0..300).filter(|_| flavor.random_event().is_some()).count();
        assert!((50..=150).contains(&quotes), "citations : {quotes}");
        assert!((5..=70).contains(&events), "événements : {events}");
    }

    #[test]
    fn every_level_but_off_has_lines() {
        for name in BrainrotLevel::NAMES {
            let level: BrainrotLevel = name.parse().unwrap();
            assert_eq!(reactions(level).is_empty(), level == BrainrotLevel::Off);
        }
    }
}
