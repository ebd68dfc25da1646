use crate::error::ReportError;
use crate::locale::Locale;
use crate::Reporter;
use std::io::Write;
use world_stats::WorldStats;

/// The short plain text summary, one value per line
pub struct TextReport<W: Write> {
    out: W,
    locale: Locale,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W, locale: Locale) -> Self {
        Self { out, locale }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReport<W> {
    fn report(&mut self, stats: &WorldStats) -> Result<(), ReportError> {
        let labels = self.locale.labels();
        writeln!(self.out, "{}", labels.title)?;
        writeln!(self.out, "{}: {}", labels.total_blocks, stats.total_blocks())?;
        writeln!(self.out, "{}: {}", labels.underground_blocks, stats.underground_blocks())?;
        writeln!(self.out, "{}: {:.2} {}", labels.map_size, stats.map_size_mb(), labels.megabytes)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::positions::MapBlockPos;

    fn render(stats: &WorldStats, locale: Locale) -> String {
        let mut report = TextReport::new(Vec::new(), locale);
        report.report(stats).unwrap();
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    pub fn english_lines() {
        let stats = WorldStats::from_positions(
            [MapBlockPos::new(0, 0, 0), MapBlockPos::new(16, -1, 0), MapBlockPos::new(-17, 5, 0)],
            5 * 1024 * 1024 + 300 * 1024,
        );
        assert_eq!(
            render(&stats, Locale::En),
            "World statistics:\nTotal blocks: 3\nUnderground blocks: 1\nMap size: 5.29 MB\n"
        );
    }

    #[test]
    pub fn russian_lines() {
        let stats = WorldStats::from_positions(Vec::new(), 0);
        assert_eq!(
            render(&stats, Locale::Ru),
            "Статистика мира:\nВсего блоков: 0\nПодземных блоков: 0\nРазмер карты: 0.00 МБ\n"
        );
    }
}
