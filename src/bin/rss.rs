use std::fs::{self, File};

use flexyledger_portfolio::{content::POSTS, rss::build_channel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let channel = build_channel(POSTS)?;
    fs::create_dir_all("public")?;
    let file = File::create("public/rss.xml")?;
    channel.pretty_write_to(file, b' ', 2)?;
    Ok(())
}
