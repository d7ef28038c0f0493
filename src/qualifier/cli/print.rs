use colored::Colorize;
use qualifier::api::{MessageLevel, render_listing};
use qualifier::commands::CmdMessage;
use qualifier::model::Quote;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_quotes(quotes: &[Quote]) {
    if quotes.is_empty() {
        return;
    }
    println!("{}", render_listing(quotes));
}
