pub mod help;
pub mod map;
pub mod production;
pub mod well_details;
pub mod wells;

use crate::app::state::AppScreen;
use crate::app::App;
use crate::ui::widgets::hints::key_hints;
use ratatui::text::Line;

/// Bottom help line for the current screen or text prompt.
pub fn key_hints_for(app: &App) -> Line<'static> {
    if app.filter_editing {
        return key_hints(&[("Enter", "Aplicar filtro"), ("ESC", "Cancelar")]);
    }
    if app.production.picker_open {
        return key_hints(&[
            ("↑/↓", "Elegir"),
            ("Enter", "Confirmar"),
            ("ESC", "Cancelar"),
        ]);
    }

    match app.screen {
        AppScreen::Map => key_hints(&[
            ("←↑↓→", "Mover"),
            ("+/-", "Zoom"),
            ("n/p", "Pozo sig./ant."),
            ("Enter", "Seleccionar"),
            ("c", "Curva"),
            ("u", "Unidad"),
            ("d", "Detalle"),
            ("F1", "Ayuda"),
            ("q", "Salir"),
        ]),
        AppScreen::Wells => key_hints(&[
            ("↑/↓", "Navegar"),
            ("Enter", "Detalle"),
            ("/", "Filtrar"),
            ("f", "Campo"),
            ("s", "Estado"),
            ("x", "Limpiar"),
            ("m", "Ver en mapa"),
            ("F1", "Ayuda"),
        ]),
        AppScreen::WellDetails => key_hints(&[
            ("c", "Curva"),
            ("r", "Recargar curva"),
            ("u", "Unidad"),
            ("m", "Ver en mapa"),
            ("ESC", "Volver"),
        ]),
        AppScreen::Production => key_hints(&[
            ("↑/↓", "Filtro"),
            ("←/→", "Cambiar valor"),
            ("Enter", "Buscar empresa"),
            ("Supr", "Quitar filtro"),
            ("u", "Unidad"),
            ("F1", "Ayuda"),
        ]),
    }
}
