use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use ba_ascii::dimensions::derive_grid;
use ba_ascii::luminance::Renderer;
use ba_core::charset::GlyphRamp;
use ba_core::config::{BrainrotLevel, ConvertConfig};
use ba_core::traits::Source;

use crate::flavor::Flavor;
use crate::output::{FrameSink, sink_for};
use crate::playback::Playback;
use crate::progress::{ProgressBar, pixel_step_crossed};
use crate::stats::ConversionStats;

/// Pause dramatique après un événement aléatoire.
const EVENT_PAUSE: Duration = Duration::from_secs(1);

/// Convert `input` and write the result to `output` (stdout when `None`).
///
/// The ramp is resolved before the input is even opened, so configuration
/// errors never produce output.
///
/// # Errors
/// Returns configuration, decode, or output errors.
pub fn convert(
    config: &ConvertConfig,
    input: &Path,
    output: Option<&Path>,
) -> Result<ConversionStats> {
    let ramp = GlyphRamp::from_name(&config.ramp)?;
    let source = ba_source::open_source(input)?;

    let mut converter = Converter::new(config, &ramp, Flavor::new(config));
    converter.stats.file_size = std::fs::metadata(input).map_or(0, |m| m.len());

    let mut sink = sink_for(output);
    converter.run(source.as_ref(), sink.as_mut())?;
    Ok(converter.into_stats())
}

/// Drives one conversion run: rendering, sink, cosmetics, statistics.
pub struct Converter<'a> {
    config: &'a ConvertConfig,
    renderer: Renderer,
    flavor: Flavor,
    stats: ConversionStats,
}

impl<'a> Converter<'a> {
    #[must_use]
    pub fn new(config: &'a ConvertConfig, ramp: &GlyphRamp, flavor: Flavor) -> Self {
        Self {
            config,
            renderer: Renderer::new(ramp, config.tone()),
            flavor,
            stats: ConversionStats::start(),
        }
    }

    /// Render every frame of `source` into `sink`, then commit the sink.
    ///
    /// # Errors
    /// Returns the first sink error.
    pub fn run(&mut self, source: &dyn Source, sink: &mut dyn FrameSink) -> Result<()> {
        let (width, height) = source.native_size();
        let spec = derive_grid(self.config.size_hints(), width, height);
        log::debug!(
            "Source {width}×{height} → grille {}×{} ({:?})",
            spec.width,
            spec.height,
            self.config.scale_mode
        );

        if source.is_animated() {
            self.run_animation(source, spec, sink)?;
        } else {
            self.run_still(source, spec, sink)?;
        }

        sink.finish()?;
        self.stats.stop();
        Ok(())
    }

    fn run_still(
        &mut self,
        source: &dyn Source,
        spec: ba_ascii::GridSpec,
        sink: &mut dyn FrameSink,
    ) -> Result<()> {
        if let Some(line) = self.flavor.configured_reaction() {
            eprintln!("{line}");
        }
        if let Some(quote) = self.flavor.motivational_quote() {
            eprintln!("\n{quote}");
        }
        if let Some(event) = self.flavor.random_event() {
            eprintln!("\n{event}");
            std::thread::sleep(EVENT_PAUSE);
        }

        let mut progress = ProgressBar::stderr(self.config.show_progress && !self.config.silent);
        let mut reported = 0u64;
        for frame in source.frames() {
            let grid = self
                .renderer
                .render_with_progress(&frame.buffer, spec, |done, total| {
                    if pixel_step_crossed(reported, done, total) {
                        progress.update(done, total, "Converting pixels");
                    }
                    reported = done;
                });
            sink.emit(1, false, &grid)?;
            self.stats.record_frame(spec.cells());
        }
        Ok(())
    }

    fn run_animation(
        &mut self,
        source: &dyn Source,
        spec: ba_ascii::GridSpec,
        sink: &mut dyn FrameSink,
    ) -> Result<()> {
        if let Some(line) = self.flavor.reaction(BrainrotLevel::Medium) {
            eprintln!("{line}");
        }
        if let Some(line) = self.flavor.gif_announcement(source.frame_count()) {
            eprintln!("{line}");
        }

        let playback = Playback::for_sink(self.config, sink.is_console());
        let mut progress = ProgressBar::stderr(self.config.show_progress && !self.config.silent);
        let stats = &mut self.stats;
        playback.run(source.frames(), spec, &self.renderer, sink, |event, _| {
            stats.record_frame(spec.cells());
            progress.update(
                event.number as u64,
                event.total as u64,
                &format!("Processing frame (Loop {})", event.pass),
            );
        })?;
        Ok(())
    }

    #[must_use]
    pub fn into_stats(self) -> ConversionStats {
        self.stats
    }
}
