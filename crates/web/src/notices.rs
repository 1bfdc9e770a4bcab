use estoque::notifications::NoticeLevel;
use leptos::prelude::*;

use crate::console::Console;

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice notice-success",
        NoticeLevel::Error => "notice notice-error",
    }
}

/// Dismissible notices, newest last.
#[component]
pub(crate) fn NoticeArea(console: Console) -> impl IntoView {
    let notices = console.screens.notices;

    view! {
        <div class="notices" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .iter()
                    .map(|notice| {
                        let id = notice.id;

                        view! {
                            <div class=notice_class(notice.level)>
                                <span>{notice.message.clone()}</span>
                                <button
                                    type="button"
                                    class="notice-close"
                                    aria-label="Fechar"
                                    on:click=move |_| console.screens.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Yes/no dialog for the pending destructive action.
#[component]
pub(crate) fn ConfirmDialog(console: Console) -> impl IntoView {
    let confirmation = console.screens.confirmation;

    view! {
        {move || {
            confirmation
                .get()
                .map_or_else(
                    || ().into_any(),
                    |pending| {
                        view! {
                            <div class="modal-backdrop">
                                <div class="modal modal-small" role="alertdialog">
                                    <p>{pending.prompt()}</p>
                                    <div class="modal-actions">
                                        <button
                                            type="button"
                                            class="btn btn-secondary"
                                            on:click=move |_| confirmation.set(None)
                                        >
                                            "Cancelar"
                                        </button>
                                        <button
                                            type="button"
                                            class="btn btn-danger"
                                            on:click=move |_| console.accept_confirmation()
                                        >
                                            "Excluir"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                        .into_any()
                    },
                )
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_levels_have_distinct_classes() {
        assert_ne!(
            notice_class(NoticeLevel::Success),
            notice_class(NoticeLevel::Error)
        );
    }
}
