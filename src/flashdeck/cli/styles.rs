use console::Style;
use once_cell::sync::Lazy;

pub static MATCH_STYLE: Lazy<Style> = Lazy::new(|| Style::new().black().on_yellow().bold());

pub static TOC_CURRENT_STYLE: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
