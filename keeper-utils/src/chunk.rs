//! Deliver long text as several messages without breaking lines.

use std::mem;

use tracing::debug;
use twilight_http::Client;
use twilight_model::id::{Id, marker::ChannelMarker};

/// Maximum number of characters Discord accepts in a message body.
pub const MESSAGE_CHAR_LIMIT: usize = 2000;

/// Split text into chunks of at most `limit` characters.
///
/// Chunks only break at newlines. A single line longer than `limit` is split
/// at character boundaries. Chunks with no visible content are dropped.
pub fn chunk_message_lines(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0_usize;

    for line in text.split('\n') {
        let line_len = line.chars().count();

        if line_len > limit {
            flush_chunk(&mut chunks, &mut current, &mut current_len);
            let chars: Vec<char> = line.chars().collect();
            for piece in chars.chunks(limit) {
                push_visible(&mut chunks, piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            line_len
        } else {
            current_len + 1 + line_len
        };
        if needed > limit {
            flush_chunk(&mut chunks, &mut current, &mut current_len);
        }

        if !current.is_empty() {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
    }

    flush_chunk(&mut chunks, &mut current, &mut current_len);
    chunks
}

fn flush_chunk(chunks: &mut Vec<String>, current: &mut String, current_len: &mut usize) {
    *current_len = 0;
    push_visible(chunks, mem::take(current));
}

fn push_visible(chunks: &mut Vec<String>, chunk: String) {
    if !chunk.trim().is_empty() {
        chunks.push(chunk);
    }
}

/// Send text to a channel, split into as many messages as needed.
pub async fn send_chunked_message(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    text: &str,
) -> anyhow::Result<()> {
    let chunks = chunk_message_lines(text, MESSAGE_CHAR_LIMIT);
    debug!(channel_id = channel_id.get(), chunks = chunks.len(), "sending chunked message");

    for chunk in &chunks {
        http.create_message(channel_id).content(chunk).await?;
    }

    Ok(())
}
