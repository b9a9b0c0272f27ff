//! 西班牙语翻译 (es-ES)

use super::keys::{
    CommonTexts, HeaderTexts, HintTexts, ModalTexts, StatusTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "User Roster",
        title: "Lista de Usuarios",
        loading: "Cargando usuarios...",
        no_users: "No hay usuarios.",
    },

    header: HeaderTexts {
        color_rows: "Colorear filas",
        uncolor_rows: "Decolorar filas",
        sort_by_country: "Ordenar por país",
        restore: "Restaurar Estado Inicial",
        filter_label: "Filtro",
        filter_placeholder: "Filtrar por país",
    },

    table: TableTexts {
        photo: "Foto",
        first_name: "Nombre",
        last_name: "Apellido",
        country: "País",
        actions: "Acciones",
        delete_action: "[d] Eliminar",
        no_match: "Ningún usuario coincide con el filtro.",
    },

    hints: HintTexts {
        move_selection: "Mover",
        sort: "Ordenar",
        color: "Colorear",
        restore: "Restaurar",
        filter: "Filtrar",
        delete: "Eliminar",
        help: "Ayuda",
        quit: "Salir",
        done: "Listo",
        clear: "Borrar",
        confirm: "Confirmar",
        cancel: "Cancelar",
    },

    status: StatusTexts {
        users: "usuarios",
        shown: "mostrados",
        deleted: "Eliminado",
        restored: "Estado inicial restaurado",
        sorted_by: "Ordenado por",
        ascending: "ascendente",
        descending: "descendente",
        nothing_selected: "Ningún usuario seleccionado",
    },

    modal: ModalTexts {
        confirm_delete_title: "Confirmar eliminación",
        confirm_delete_question: "¿Eliminar este usuario?",
        cancel: "Cancelar",
        delete: "Eliminar",
        help_title: "Ayuda",
        help_table_section: "Tabla",
        help_filter_section: "Campo de filtro",
        help_close_hint: "Pulsa Esc para cerrar la ayuda",
    },
};
