use anyhow::Result;
use daybook_core::Daybook;
use owo_colors::OwoColorize;

pub fn run(daybook: &Daybook) -> Result<()> {
    println!("{}", "Paths".bold());
    println!("  Config:  {}", daybook.config_path().display());
    println!("  Data:    {}", daybook.data_path().display());
    println!("  Events:  {}", daybook.events_path().display());
    println!("  Notes:   {}", daybook.notes().dir().display());

    let conf = daybook.conf();
    println!();
    println!("{}", "Appearance".bold());
    println!("  Color theme:  {}", conf.appearance.color_theme.name());
    println!("  Layout:       {}", conf.appearance.layout.number());

    Ok(())
}
