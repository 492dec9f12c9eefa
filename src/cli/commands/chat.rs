//! `chat` command: send one message to the chat endpoint

use anyhow::Result;

use crate::chat::{ChatClient, ChatContext, ChatReply};
use crate::config::Settings;

pub struct ChatParams {
    pub message: String,
    pub email: String,
    pub customer_id: String,
    pub customer_name: String,
    pub url: Option<String>,
}

pub async fn run_chat_command(mut settings: Settings, params: ChatParams) -> Result<()> {
    if let Some(url) = params.url {
        settings.chat.url = url;
    }

    let client = ChatClient::from_settings(&settings.chat)?;
    let context = ChatContext {
        email: params.email,
        customer_id: params.customer_id,
        customer_name: params.customer_name,
    };

    match client.send(&params.message, context).await? {
        ChatReply::Answer(text) => println!("{}", text),
        ChatReply::Declined(text) => eprintln!("{}", text),
    }
    Ok(())
}
