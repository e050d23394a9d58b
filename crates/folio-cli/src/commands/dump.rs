use anyhow::Result;

use folio_core::Portfolio;

pub fn run(pretty: bool) -> Result<()> {
    let portfolio = Portfolio::builtin();
    portfolio.validate()?;
    println!("{}", render(&portfolio, pretty)?);
    Ok(())
}

fn render(portfolio: &Portfolio, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(portfolio)?
    } else {
        serde_json::to_string(portfolio)?
    };
    Ok(json)
}
