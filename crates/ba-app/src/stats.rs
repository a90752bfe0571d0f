use std::time::{Duration, Instant};

/// Statistiques d'une conversion, affichées avec `--benchmark`.
///
/// Purement observationnelles : elles n'influencent jamais le rendu.
#[derive(Clone, Debug)]
pub struct ConversionStats {
    pub started: Instant,
    pub elapsed: Option<Duration>,
    /// Frames émises, toutes passes confondues.
    pub frame_count: u64,
    /// Cellules échantillonnées, toutes frames confondues.
    pub pixel_count: u64,
    /// Taille du fichier source en octets.
    pub file_size: u64,
}

impl Default for ConversionStats {
    fn default() -> Self {
        Self::start()
    }
}

impl ConversionStats {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            elapsed: None,
            frame_count: 0,
            pixel_count: 0,
            file_size: 0,
        }
    }

    pub fn record_frame(&mut self, cells: u64) {
        self.frame_count += 1;
        self.pixel_count += cells;
    }

    /// Freeze the elapsed time.
    pub fn stop(&mut self) {
        self.elapsed = Some(self.started.elapsed());
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.started.elapsed())
    }

    /// Pixels per second, `None` for a zero duration.
    #[must_use]
    pub fn speed(&self) -> Option<f64> {
        let secs = self.duration().as_secs_f64();
        (secs > 0.0).then(|| self.pixel_count as f64 / secs)
    }

    #[must_use]
    pub fn report(&self) -> String {
        let mut out = format!(
            "\n📊 CONVERSION STATS 📊\nDuration: {:?}\nFrames: {}\nPixels: {}\nFile Size: {} bytes\n",
            self.duration(),
            self.frame_count,
            self.pixel_count,
            self.file_size
        );
        if let Some(speed) = self.speed() {
            out.push_str(&format!("Speed: {speed:.2} pixels/sec\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_accumulate() {
        let mut stats = ConversionStats::start();
        stats.record_frame(80 * 17);
        stats.record_frame(80 * 17);
        assert_eq!(stats.frame_count, 2);
        assert_eq!(stats.pixel_count, 2720);
    }

    #[test]
    fn report_lists_every_counter() {
        let mut stats = ConversionStats::start();
        stats.record_frame(10);
        stats.file_size = 4096;
        stats.elapsed = Some(Duration::from_secs(2));
        let report = stats.report();
        assert!(report.contains("Frames: 1\n"));
        assert!(report.contains("Pixels: 10\n"));
        assert!(report.contains("File Size: 4096 bytes\n"));
        assert!(report.contains("Speed: 5.00 pixels/sec\n"));
    }

    #[test]
    fn zero_duration_has_no_speed() {
        let stats = ConversionStats {
            elapsed: Some(Duration::ZERO),
            ..ConversionStats::start()
        };
        assert!(stats.speed().is_none());
        assert!(!stats.report().contains("Speed"));
    }
}
