//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, HeaderTexts, HintTexts, ModalTexts, StatusTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "User Roster",
        title: "User List",
        loading: "Loading users...",
        no_users: "No users to show.",
    },

    header: HeaderTexts {
        color_rows: "Color rows",
        uncolor_rows: "Uncolor rows",
        sort_by_country: "Sort by country",
        restore: "Restore initial state",
        filter_label: "Filter",
        filter_placeholder: "Filter by country",
    },

    table: TableTexts {
        photo: "Photo",
        first_name: "First Name",
        last_name: "Last Name",
        country: "Country",
        actions: "Actions",
        delete_action: "[d] Delete",
        no_match: "No user matches the filter.",
    },

    hints: HintTexts {
        move_selection: "Move",
        sort: "Sort",
        color: "Color",
        restore: "Restore",
        filter: "Filter",
        delete: "Delete",
        help: "Help",
        quit: "Quit",
        done: "Done",
        clear: "Clear",
        confirm: "Confirm",
        cancel: "Cancel",
    },

    status: StatusTexts {
        users: "users",
        shown: "shown",
        deleted: "Deleted",
        restored: "Initial state restored",
        sorted_by: "Sorted by",
        ascending: "ascending",
        descending: "descending",
        nothing_selected: "No user selected",
    },

    modal: ModalTexts {
        confirm_delete_title: "Confirm Deletion",
        confirm_delete_question: "Delete this user?",
        cancel: "Cancel",
        delete: "Delete",
        help_title: "Help",
        help_table_section: "Table",
        help_filter_section: "Filter input",
        help_close_hint: "Press Esc to close the help",
    },
};
