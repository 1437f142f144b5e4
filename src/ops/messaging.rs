use crate::{
    actor::FranchiseActor,
    codec::{nat_to_u64, to_instant},
    domain::{Conversation, Message},
    error::MarshalError,
    log,
    wire::{WireValue, decode_list_with, encode_list},
};
use candid::{Nat, Principal};

/// map_conversation
/// Participant order follows the wire cons-list.
pub fn map_conversation(value: &WireValue) -> Result<Conversation, MarshalError> {
    Ok(Conversation {
        id: nat_to_u64(value.field("id")?.as_nat("id")?, "conversation id")?,
        participants: decode_list_with(value.field("participants")?, "participants", |v| {
            v.as_principal("participants")
        })?,
    })
}

/// map_message
pub fn map_message(value: &WireValue) -> Result<Message, MarshalError> {
    Ok(Message {
        id: nat_to_u64(value.field("id")?.as_nat("id")?, "message id")?,
        conversation_id: nat_to_u64(
            value.field("conversationId")?.as_nat("conversationId")?,
            "conversation id",
        )?,
        sender: value.field("sender")?.as_principal("sender")?,
        recipient: value.field("recipient")?.as_principal("recipient")?,
        text: value.field("text")?.as_text("text")?.to_string(),
        sent_at: to_instant(
            value.field("timestamp")?.as_nat("timestamp")?,
            "message timestamp",
        )?,
    })
}

/// create_conversation
/// Returns the new conversation's id.
pub async fn create_conversation(
    actor: &dyn FranchiseActor,
    participants: &[Principal],
) -> Result<u64, MarshalError> {
    let wire_participants = encode_list(
        participants
            .iter()
            .map(|participant| WireValue::Principal(*participant))
            .collect(),
    );

    let raw = actor.create_conversation(wire_participants).await?;

    nat_to_u64(raw.as_nat("createConversation result")?, "conversation id")
}

/// get_all_conversations_by_principal
pub async fn get_all_conversations_by_principal(
    actor: &dyn FranchiseActor,
    principal: Principal,
) -> Result<Vec<Conversation>, MarshalError> {
    let raw = actor.get_all_conversations_by_principal(principal).await?;

    decode_list_with(&raw, "getAllConversationsByPrincipal result", map_conversation)
}

/// get_all_messages_by_conversation
pub async fn get_all_messages_by_conversation(
    actor: &dyn FranchiseActor,
    conversation_id: u64,
) -> Result<Vec<Message>, MarshalError> {
    let raw = actor
        .get_all_messages_by_conversation(Nat::from(conversation_id))
        .await?;

    decode_list_with(&raw, "getAllMessagesByConversation result", map_message)
}

/// send_message
/// Returns the new message's id.
pub async fn send_message(
    actor: &dyn FranchiseActor,
    conversation_id: u64,
    recipient: Principal,
    text: &str,
) -> Result<u64, MarshalError> {
    let raw = actor
        .send_message(Nat::from(conversation_id), recipient, text.to_string())
        .await?;
    let id = nat_to_u64(raw.as_nat("sendMessage result")?, "message id")?;

    log!("messaging", "sent message {id} in conversation {conversation_id}");

    Ok(id)
}
