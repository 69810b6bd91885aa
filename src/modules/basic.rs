use anyhow::Result;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::common::UpdateHandler;

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "snake_case",
    description = "These commands are supported:"
)]
enum Command {
    #[command(description = "start planning.")]
    Start,

    #[command(description = "display this text.")]
    Help,

    #[command(description = "show bot version.")]
    Version,
}

pub fn command_handler() -> UpdateHandler {
    teloxide::filter_command::<Command, _>().endpoint(handle_command)
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    command: Command,
) -> Result<()> {
    let text = match command {
        Command::Start => {
            let name =
                msg.from.as_ref().map_or("there", |u| u.first_name.as_str());
            format!(
                "Hi, {name}! I will help you plan your events: tasks, \
                 expenses, performers and locations.\n\n{}",
                Command::descriptions(),
            )
        }
        Command::Help => Command::descriptions().to_string(),
        Command::Version => crate::version().to_string(),
    };
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}
