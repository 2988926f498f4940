use serenity::all::{
    ChannelId, ChannelPinsUpdateEvent, Context, EventHandler, Guild, GuildChannel, GuildId,
    GuildMemberUpdateEvent, Interaction, Member, Message, MessageId, MessageUpdateEvent, Reaction,
    Ready, Role, RoleId, TypingStartEvent, User, VoiceState,
};
use serenity::async_trait;

use crate::state::BotState;

pub mod channel;
pub mod guild;
pub mod interaction;
pub mod member;
pub mod message;
pub mod reaction;
pub mod ready;
pub mod role;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
}

impl Handler {
    pub fn new(state: BotState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.state, ctx, guild, is_new).await;
    }

    /// Called when a role is created in a guild
    async fn guild_role_create(&self, ctx: Context, new: Role) {
        role::handle_guild_role_create(ctx, new).await;
    }

    /// Called when a role is updated in a guild
    async fn guild_role_update(&self, ctx: Context, old: Option<Role>, new: Role) {
        role::handle_guild_role_update(ctx, old, new).await;
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        removed_role_data_if_in_cache: Option<Role>,
    ) {
        role::handle_guild_role_delete(ctx, guild_id, removed_role_id, removed_role_data_if_in_cache)
            .await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.state, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(ctx, guild_id, user, member_data_if_available).await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(ctx, old, new, event).await;
    }

    /// Called when a user is banned from a guild
    async fn guild_ban_addition(&self, ctx: Context, guild_id: GuildId, banned_user: User) {
        member::handle_guild_ban_addition(ctx, guild_id, banned_user).await;
    }

    /// Called when a user is unbanned from a guild
    async fn guild_ban_removal(&self, ctx: Context, guild_id: GuildId, unbanned_user: User) {
        member::handle_guild_ban_removal(ctx, guild_id, unbanned_user).await;
    }

    /// Called when a channel is created in a guild
    async fn channel_create(&self, ctx: Context, channel: GuildChannel) {
        channel::handle_channel_create(ctx, channel).await;
    }

    /// Called when a channel is updated in a guild
    async fn channel_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        channel::handle_channel_update(ctx, old, new).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(ctx, channel, messages).await;
    }

    /// Called when a message is pinned or unpinned in a channel
    async fn channel_pins_update(&self, ctx: Context, pin: ChannelPinsUpdateEvent) {
        channel::handle_channel_pins_update(ctx, pin).await;
    }

    /// Called when someone starts typing in a channel
    async fn typing_start(&self, ctx: Context, event: TypingStartEvent) {
        channel::handle_typing_start(ctx, event).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, new_message: Message) {
        message::handle_message(&self.state, ctx, new_message).await;
    }

    /// Called when a message is edited
    async fn message_update(
        &self,
        ctx: Context,
        old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        message::handle_message_update(ctx, old_if_available, new, event).await;
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(ctx, channel_id, deleted_message_id, guild_id).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(ctx, add_reaction).await;
    }

    /// Called when a reaction is removed from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction_remove(ctx, removed_reaction).await;
    }

    /// Called when all reactions are cleared from a message
    async fn reaction_remove_all(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        removed_from_message_id: MessageId,
    ) {
        reaction::handle_reaction_remove_all(ctx, channel_id, removed_from_message_id).await;
    }

    /// Called when every reaction of one emoji is cleared from a message
    async fn reaction_remove_emoji(&self, ctx: Context, removed_reactions: Reaction) {
        reaction::handle_reaction_remove_emoji(ctx, removed_reactions).await;
    }

    /// Called when a user joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.state, ctx, old, new).await;
    }

    /// Called when a slash command is invoked or autocompleted
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }
}
