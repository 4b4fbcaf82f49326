use egui::{Response, TextEdit, Ui};
use roster_business::{SearchUsersCommand, UserListState, UserTableInput};
use roster_states::StateCtx;

pub const SEARCH_HINT: &str = "Search by name or email...";

/// Search field showing the store's applied term; every edit re-filters the table.
pub fn search_bar(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut term = state_ctx.state::<UserListState>().search_term().to_owned();

    let response = ui.add(
        TextEdit::singleline(&mut term)
            .hint_text(SEARCH_HINT)
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        state_ctx.update::<UserTableInput>(|input| input.search = Some(term));
        state_ctx.dispatch::<SearchUsersCommand>();
    }

    response
}
