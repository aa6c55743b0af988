use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

const RULE: &str = "============================================================";
const TITLE_RGB: (u8, u8, u8) = (0x3a, 0xa9, 0xff);

pub(crate) fn print_cli_banner(no_color: bool) {
    let use_color = !no_color && std::io::stdout().is_terminal();

    let title = format!(
        "portalcheck v{} | captive portal socket check",
        env!("CARGO_PKG_VERSION")
    );

    println!();
    println!("{}", RULE);
    if use_color {
        println!(
            "{}",
            title.with(Color::Rgb {
                r: TITLE_RGB.0,
                g: TITLE_RGB.1,
                b: TITLE_RGB.2
            })
        );
    } else {
        println!("{title}");
    }
    println!("{}", RULE);
}
