use crate::ui::theme::{key_style, title_style};
use crate::ui::widgets::popup::centered_rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SECTIONS: [(&str, &[(&str, &str)]); 5] = [
    (
        "General",
        &[
            ("Tab / Shift+Tab", "Pantalla siguiente / anterior"),
            ("1-4", "Mapa, Pozos, Detalle, Producción"),
            ("F1 / ?", "Mostrar u ocultar esta ayuda"),
            ("q", "Salir"),
        ],
    ),
    (
        "Mapa",
        &[
            ("Flechas", "Mover la vista"),
            ("+ / - / 0", "Acercar, alejar, vista inicial"),
            ("n / p", "Recorrer pozos visibles"),
            ("Enter", "Seleccionar el pozo enfocado"),
            ("c / r / u", "Curva, recargar curva, m³ ↔ BBL"),
        ],
    ),
    (
        "Pozos",
        &[
            ("/", "Escribir valor del filtro"),
            ("f / F", "Cambiar el campo filtrado"),
            ("s", "Filtrar por estado"),
            ("x", "Quitar filtros"),
            ("r", "Recargar pozos"),
        ],
    ),
    (
        "Detalle",
        &[("c / r / u", "Curva, recargar curva, m³ ↔ BBL"), ("m", "Ver en mapa")],
    ),
    (
        "Producción",
        &[
            ("↑ / ↓", "Elegir filtro"),
            ("← / →", "Cambiar año o mes"),
            ("Enter", "Buscar empresa"),
            ("Supr", "Quitar el filtro elegido"),
            ("R", "Recargar empresas"),
        ],
    ),
];

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(70, 80, f.area());

    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(title, title_style())));
        for (key, action) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<16}"), key_style()),
                Span::raw(*action),
            ]));
        }
        lines.push(Line::default());
    }

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Ayuda (ESC para cerrar)")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
