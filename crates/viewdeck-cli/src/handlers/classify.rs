use anyhow::Result;

use viewdeck_engine::classify;

use crate::args::OutputFormat;

pub fn handle(title: &str, format: OutputFormat) -> Result<()> {
    let classification = classify(title);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&classification)?),
        OutputFormat::Plain => {
            println!("status: {}", classification.status);
            println!("color:  {}", classification.status_color.as_str());
            println!("icon:   {}", classification.icon_name);
            if classification.show_view_more {
                println!("shows a view-more link");
            }
        }
    }
    Ok(())
}
