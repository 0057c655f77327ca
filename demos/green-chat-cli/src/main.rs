// green-marketplace-client/green-chat-cli
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;

use anyhow::{format_err, Result};
use itertools::Itertools;
use tokio::io::{AsyncBufReadExt, BufReader};

use common::{cache_dir, enable_debug_logging, load_dotenv, load_session, Level};
use green_core_client::dtos::{Attachment, ConversationId, LoadState, Message};
use green_core_client::infra::api::ApiConfig;
use green_core_client::infra::session::FileSessionRepository;
use green_core_client::infra::transport::LocalChatTransport;
use green_core_client::{
    Client, ClientDelegate, ClientEvent, ConversationView, SendOutcome, WrappingMessageIdProvider,
};

struct Delegate;

impl ClientDelegate for Delegate {
    fn handle_event(&self, event: ClientEvent) {
        println!("<- {:?}", event)
    }
}

async fn configure_client() -> Result<Client> {
    let session_path = cache_dir("green-chat-cli")?.join("session.json");
    println!("Session is persisted at {:?}", session_path);

    let client = Client::builder()
        .set_transport(LocalChatTransport::new())
        .set_api_config(ApiConfig::from_env()?)
        .set_session_repository(FileSessionRepository::new(session_path))
        .set_message_id_provider(WrappingMessageIdProvider::nano_id())
        .set_delegate(Some(Box::new(Delegate)))
        .build()?;

    if let Some(user) = client.restore_session().await? {
        println!("Restored session of {} ({}).", user.name, user.id);
        return Ok(client);
    }

    let session = load_session()?;
    println!("Signing in as {}…", session.user.id);
    client.sign_in(session).await?;
    Ok(client)
}

fn format_message(message: &Message) -> String {
    let attachments = message
        .attachments
        .iter()
        .map(|attachment| match attachment {
            Attachment::Product { product_id } => format!("[product {}]", product_id),
            Attachment::Unknown => "[attachment]".to_string(),
        })
        .join(" ");

    format!(
        "{} {:<16} {}{}{}",
        message.created_at.format("%Y-%m-%d %H:%M"),
        message.sender.name,
        message.content,
        if attachments.is_empty() { "" } else { " " },
        attachments
    )
}

fn print_history(view: &ConversationView) {
    if view.load_state() == LoadState::Failed {
        println!("Could not load the history of {}.", view.id());
        return;
    }

    if let Some(product) = view.conversation().and_then(|c| c.product) {
        println!("About: {} ({})", product.name, product.id);
    }

    let messages = view.messages();
    if messages.is_empty() {
        println!("No messages yet.");
        return;
    }
    println!("{}", messages.iter().map(format_message).join("\n"));
}

async fn send(view: &ConversationView, text: &str) -> Result<()> {
    view.set_composer_text(text);
    match view.send_message().await? {
        SendOutcome::Skipped => (),
        SendOutcome::Sent(message) => println!("{}", format_message(&message)),
        SendOutcome::Failed { reason } => println!("Failed to send message: {}", reason),
    }
    Ok(())
}

async fn run_composer(client: &Client, view: &ConversationView) -> Result<()> {
    println!("Type a message and press enter.");
    println!("Commands: /product, /read, /history, /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        client.record_activity();

        match line.trim() {
            "/quit" => break,
            "/product" => {
                let attach = !view.composer().attach_product;
                view.set_attach_product(attach);
                println!("Attach product: {}", attach);
            }
            "/read" => view.mark_conversation_read().await,
            "/history" => print_history(view),
            text => send(view, text).await?,
        }
    }

    view.composer_did_blur();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv()?;
    enable_debug_logging(Level::DEBUG)?;

    let mut args = env::args().skip(1);
    let conversation_id = args
        .next()
        .map(ConversationId::from)
        .ok_or_else(|| format_err!("Usage: green-chat-cli <conversation-id> [message]"))?;
    let message = args.join(" ");

    let client = configure_client().await?;

    if client.sign_out_if_idle().await? {
        println!("Signed out after being idle for too long.");
        return Ok(());
    }

    let view = client.open_conversation(&conversation_id).await?;
    print_history(&view);

    if message.is_empty() {
        run_composer(&client, &view).await?;
    } else {
        send(&view, &message).await?;
    }

    Ok(())
}
