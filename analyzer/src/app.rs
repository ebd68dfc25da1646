use crate::cli::Cli;
use anyhow::Context;
use report::{ImageReport, JsonReport, Locale, Reporter, TextReport};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use world_stats::{WorldAnalyzer, WorldMeta, WorldStats};

pub struct App {
    analyzer: WorldAnalyzer,
    meta: Option<WorldMeta>,
    locale: Locale,
    image: Option<ImageReport>,
    json: Option<PathBuf>,
}

impl App {
    pub fn new(cli: Cli) -> anyhow::Result<Self> {
        let config = cli.world_config()?;
        let image = (!cli.no_image).then(|| ImageReport::new(&cli.output).with_panel_size(cli.panel_size));

        Ok(Self {
            analyzer: WorldAnalyzer::new(config),
            meta: None,
            locale: cli.locale,
            image,
            json: cli.json,
        })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.starting()?;
        let stats = self.running()?;
        self.exiting(&stats)
    }

    fn starting(&mut self) -> anyhow::Result<()> {
        let config = self.analyzer.config();
        log::info!("world directory {}", config.world_path.display());
        match self.analyzer.read_meta() {
            Ok(Some(meta)) => {
                log::info!(
                    "world {:?}, game {:?}, backend {:?}",
                    meta.world_name().unwrap_or("unnamed"),
                    meta.game_id().unwrap_or("unknown"),
                    meta.backend().unwrap_or("sqlite3")
                );
                self.meta = Some(meta);
            }
            Ok(None) => log::warn!("no {} in the world directory", config.world_mt_file),
            Err(err) => log::warn!("{err}, skipping the backend check"),
        }
        Ok(())
    }

    fn running(&mut self) -> anyhow::Result<WorldStats> {
        let map_path = self.analyzer.config().map_path();
        self.analyzer
            .analyze_with_meta(self.meta.as_ref())
            .with_context(|| format!("analysis of {} failed", map_path.display()))
    }

    ///run every reporter even if one fails, the text report goes first so it survives a broken image path
    fn exiting(&mut self, stats: &WorldStats) -> anyhow::Result<()> {
        let mut failed = Vec::new();

        let mut text = TextReport::new(io::stdout(), self.locale);
        report_to(&mut text, "text report", stats, &mut failed);

        if let Some(path) = &self.json {
            let name = format!("json report {}", path.display());
            match json_output(path) {
                Ok(out) => report_to(&mut JsonReport::new(out), &name, stats, &mut failed),
                Err(err) => {
                    log::error!("{err:#}");
                    failed.push(name);
                }
            }
        }

        if let Some(image) = &mut self.image {
            let name = format!("charts {}", image.path().display());
            report_to(image, &name, stats, &mut failed);
        }

        if failed.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("could not write {}", failed.join(", "))
        }
    }
}

fn report_to(reporter: &mut impl Reporter, name: &str, stats: &WorldStats, failed: &mut Vec<String>) {
    if let Err(err) = reporter.report(stats) {
        log::error!("{name}: {err}");
        failed.push(name.to_string());
    }
}

fn json_output(path: &Path) -> anyhow::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdout()));
    }
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}
