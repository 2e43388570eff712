use maintwatch_core::parse_announcement;
use std::io::Read;

pub fn run(text: Option<&str>) -> anyhow::Result<()> {
    let text = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    println!("{}", describe(&text)?);
    Ok(())
}

fn describe(text: &str) -> anyhow::Result<String> {
    match parse_announcement(text) {
        Some(window) => Ok(serde_json::to_string_pretty(&window)?),
        None => Ok("no maintenance window found".to_string()),
    }
}
