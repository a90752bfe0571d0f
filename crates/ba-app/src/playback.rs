use std::time::Duration;

use anyhow::Result;
use ba_ascii::dimensions::GridSpec;
use ba_ascii::luminance::Renderer;
use ba_core::config::{ConvertConfig, LoopPolicy};
use ba_core::frame::{AsciiGrid, Frame};

use crate::output::FrameSink;

/// Orchestration de la lecture d'une séquence animée : passes, délais, effacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playback {
    pub policy: LoopPolicy,
    /// Effacer l'écran et attendre entre les frames.
    pub interactive: bool,
    /// Délai utilisé quand une frame n'en déclare pas.
    pub fallback_delay: Duration,
}

/// Position d'une frame dans la lecture, passée au callback de `run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameEvent {
    /// 1-based, dans la passe.
    pub number: usize,
    pub total: usize,
    /// 1-based.
    pub pass: u32,
}

impl Playback {
    /// Build the playback policy for a given destination.
    ///
    /// An infinite loop cannot terminate into a file, so it is reduced to a
    /// single pass there. Interactive mode only applies to the console.
    #[must_use]
    pub fn for_sink(config: &ConvertConfig, console: bool) -> Self {
        let mut policy = config.loop_policy();
        if policy == LoopPolicy::Forever && !console {
            log::warn!("Boucle infinie impossible vers un fichier, une seule passe sera écrite");
            policy = LoopPolicy::Once;
        }
        if config.interactive && !console {
            log::warn!("--interactive ignoré : la sortie n'est pas le terminal");
        }
        Self {
            policy,
            interactive: config.interactive && console,
            fallback_delay: Duration::from_millis(config.frame_delay_ms),
        }
    }

    /// Délai à respecter après `frame` en lecture interactive.
    #[must_use]
    pub fn delay_for(&self, frame: &Frame) -> Duration {
        frame
            .delay_ms
            .map_or(self.fallback_delay, |ms| Duration::from_millis(u64::from(ms)))
    }

    /// Render and emit every frame, in order, once per pass.
    ///
    /// Frames are re-rendered on each pass. `on_frame` is called after each
    /// frame has been emitted. Returns the number of completed passes.
    ///
    /// # Errors
    /// Returns the first sink error; frames already streamed are not rolled back.
    pub fn run(
        &self,
        frames: &[Frame],
        spec: GridSpec,
        renderer: &Renderer,
        sink: &mut dyn FrameSink,
        mut on_frame: impl FnMut(FrameEvent, &AsciiGrid),
    ) -> Result<u32> {
        let total = frames.len();
        let mut passes = 0u32;
        while self.policy.wants_pass(passes) {
            for (i, frame) in frames.iter().enumerate() {
                if self.interactive {
                    sink.clear()?;
                }
                let event = FrameEvent {
                    number: i + 1,
                    total,
                    pass: passes + 1,
                };
                log::debug!("Frame {}/{} (loop {})", event.number, total, event.pass);

                let grid = renderer.render(&frame.buffer, spec);
                sink.emit(event.number, true, &grid)?;
                on_frame(event, &grid);

                if self.interactive {
                    std::thread::sleep(self.delay_for(frame));
                }
            }
            passes = passes.saturating_add(1);
        }
        Ok(passes)
    }
}

#[cfg(test)]
mod tests {
    use ba_core::charset::GlyphRamp;
    use ba_core::config::ToneParams;
    use ba_core::frame::FrameBuffer;

    use super::*;
    use crate::output::{ConsoleSink, FileSink};

    fn frames() -> Vec<Frame> {
        vec![
            Frame {
                buffer: FrameBuffer::from_rgb(1, 1, &[(255, 255, 255)]),
                delay_ms: Some(30),
            },
            Frame::still(FrameBuffer::from_rgb(1, 1, &[(0, 0, 0)])),
        ]
    }

    fn renderer() -> Renderer {
        Renderer::new(&GlyphRamp::from_name("default").unwrap(), ToneParams::default())
    }

    const SPEC: GridSpec = GridSpec {
        width: 2,
        height: 1,
    };

    #[test]
    fn single_pass_emits_frames_in_order() {
        let playback = Playback::for_sink(&ConvertConfig::default(), true);
        let mut sink = ConsoleSink::new(Vec::new());
        let mut events = Vec::new();
        let passes = playback
            .run(&frames(), SPEC, &renderer(), &mut sink, |e, _| events.push(e))
            .unwrap();
        assert_eq!(passes, 1);
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "  \n@@\n");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], FrameEvent { number: 2, total: 2, pass: 1 });
    }

    #[test]
    fn bounded_loop_restarts_frame_numbers() {
        let config = ConvertConfig {
            loop_gif: true,
            loop_count: 3,
            ..ConvertConfig::default()
        };
        let playback = Playback::for_sink(&config, false);
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(&dir.path().join("loop.txt"));
        let passes = playback
            .run(&frames(), SPEC, &renderer(), &mut sink, |_, _| {})
            .unwrap();
        assert_eq!(passes, 3);
        assert_eq!(sink.contents().matches("=== FRAME 1 ===").count(), 3);
        assert_eq!(sink.contents().matches("=== FRAME 2 ===").count(), 3);
        assert!(!sink.contents().contains("=== FRAME 3 ==="));
    }

    #[test]
    fn forever_into_file_is_one_pass() {
        let config = ConvertConfig {
            loop_gif: true,
            loop_count: 0,
            ..ConvertConfig::default()
        };
        assert_eq!(Playback::for_sink(&config, false).policy, LoopPolicy::Once);
        assert_eq!(Playback::for_sink(&config, true).policy, LoopPolicy::Forever);
    }

    #[test]
    fn interactive_only_on_console() {
        let config = ConvertConfig {
            interactive: true,
            ..ConvertConfig::default()
        };
        assert!(Playback::for_sink(&config, true).interactive);
        assert!(!Playback::for_sink(&config, false).interactive);
    }

    #[test]
    fn frame_delay_falls_back_to_configured_delay() {
        let config = ConvertConfig {
            frame_delay_ms: 75,
            ..ConvertConfig::default()
        };
        let playback = Playback::for_sink(&config, true);
        let frames = frames();
        assert_eq!(playback.delay_for(&frames[0]), Duration::from_millis(30));
        assert_eq!(playback.delay_for(&frames[1]), Duration::from_millis(75));
    }

    #[test]
    fn interactive_playback_clears_before_each_frame() {
        let config = ConvertConfig {
            interactive: true,
            frame_delay_ms: 1,
            ..ConvertConfig::default()
        };
        let playback = Playback::for_sink(&config, true);
        let mut sink = ConsoleSink::new(Vec::new());
        let frames = vec![
            Frame {
                buffer: FrameBuffer::from_rgb(1, 1, &[(0, 0, 0)]),
                delay_ms: Some(1),
            };
            3
        ];
        playback
            .run(&frames, SPEC, &renderer(), &mut sink, |_, _| {})
            .unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out.matches("\x1b[2J").count(), 3);
        assert_eq!(out.matches("@@\n").count(), 3);
    }
}
