use crate::error::ReportError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Language of the text report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

pub struct Labels {
    pub title: &'static str,
    pub total_blocks: &'static str,
    pub underground_blocks: &'static str,
    pub map_size: &'static str,
    pub megabytes: &'static str,
}

const EN: Labels = Labels {
    title: "World statistics:",
    total_blocks: "Total blocks",
    underground_blocks: "Underground blocks",
    map_size: "Map size",
    megabytes: "MB",
};

const RU: Labels = Labels {
    title: "Статистика мира:",
    total_blocks: "Всего блоков",
    underground_blocks: "Подземных блоков",
    map_size: "Размер карты",
    megabytes: "МБ",
};

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

impl FromStr for Locale {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(ReportError::UnknownLocale(s.to_string())),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        })
    }
}
