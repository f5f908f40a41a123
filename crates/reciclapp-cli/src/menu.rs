//! Interactive text menu
//!
//! Reads answers line by line from any `BufRead` so the dialogue can be
//! driven from tests. End of input leaves the menu.

use std::io::{BufRead, Write};

use reciclapp_app::app::{ImpactService, RegistrationOutcome, RegistrationRequest};
use reciclapp_domain::model::MaterialProfile;
use reciclapp_domain::repository::ImpactLogRepository;
use reciclapp_domain::service::classify;
use reciclapp_types::{OutputFormat, Result, SizingInput};

use crate::output::{write_catalog, write_record, write_total};

pub struct InteractiveMenu<'s, L, R, W> {
    service: &'s ImpactService<L>,
    input: R,
    output: W,
}

impl<'s, L, R, W> InteractiveMenu<'s, L, R, W>
where
    L: ImpactLogRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(service: &'s ImpactService<L>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Main loop
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n=== ♻️ ReciclApp - Menú Principal ===")?;
            writeln!(self.output, "1. Registrar nuevo residuo")?;
            writeln!(self.output, "2. Ver impacto acumulado")?;
            writeln!(self.output, "3. Limpiar historial")?;
            writeln!(self.output, "4. Salir")?;

            let Some(option) = self.prompt("Seleccione una opción: ")? else {
                return Ok(());
            };

            match option.as_str() {
                "1" => self.register()?,
                "2" => {
                    let total = self.service.accumulated()?;
                    write_total(&mut self.output, OutputFormat::Table, &total)?;
                }
                "3" => {
                    if self.service.clear()? {
                        writeln!(self.output, "🗑 Historial limpiado correctamente.")?;
                    } else {
                        writeln!(self.output, "No hay historial para limpiar.")?;
                    }
                }
                "4" => {
                    writeln!(self.output, "👋 ¡Gracias por usar ReciclApp! 🌱")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "⚠️ Opción inválida. Intente nuevamente.")?,
            }
        }
    }

    /// One registration dialogue; returns to the menu on invalid selection,
    /// declined confirmation, or end of input
    fn register(&mut self) -> Result<()> {
        let service = self.service;
        writeln!(self.output, "\n¿Qué tipo de residuo desea registrar?")?;
        write_catalog(&mut self.output, OutputFormat::Table, service.catalog())?;

        let Some(selection) = self.prompt("Ingrese el número correspondiente: ")? else {
            return Ok(());
        };
        let profile = match service.matcher().select(&selection) {
            Ok(profile) => profile,
            Err(e) if e.is_input_error() => {
                writeln!(self.output, "❌ Selección inválida.")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if !profile.recyclable {
            writeln!(self.output, "\n⚠️ Este residuo NO se puede reciclar.")?;
            writeln!(
                self.output,
                "❌ Ejemplos: pañales, papel higiénico, papel sucio, colillas, pilas usadas, residuos orgánicos contaminados."
            )?;
            let answer = self.prompt("¿Deseás registrarlo igualmente para llevar control? (si/no): ")?;
            if !is_yes(answer.as_deref()) {
                writeln!(self.output, "❌ Registro cancelado.")?;
                return Ok(());
            }
        }

        let Some(description) = self.prompt("Ingrese una descripción del residuo: ")? else {
            return Ok(());
        };
        let Some(sizing) = self.ask_sizing(profile)? else {
            return Ok(());
        };

        let request = RegistrationRequest::by_selection(selection, sizing)
            .with_description(description)
            .with_confirmation(true);
        match service.register(request)? {
            RegistrationOutcome::Registered(record) => {
                write_record(&mut self.output, OutputFormat::Table, &record)?
            }
            RegistrationOutcome::Declined { .. } => {
                writeln!(self.output, "❌ Registro cancelado.")?
            }
        }
        Ok(())
    }

    /// Capacity for bottles when known, otherwise height and width;
    /// invalid values are asked again
    fn ask_sizing(&mut self, profile: &MaterialProfile) -> Result<Option<SizingInput>> {
        let by_capacity = profile.capacity_sized
            && is_yes(
                self.prompt("¿Sabés la capacidad de la botella en litros? (si/no): ")?
                    .as_deref(),
            );

        loop {
            let sizing = if by_capacity {
                match self.ask_number("Ingrese la capacidad de la botella en litros (ej: 2): ")? {
                    Some(liters) => SizingInput::capacity(liters),
                    None => return Ok(None),
                }
            } else {
                let Some(height) = self.ask_number("Ingrese el alto del residuo en cm: ")? else {
                    return Ok(None);
                };
                let Some(width) = self.ask_number("Ingrese el ancho del residuo en cm: ")? else {
                    return Ok(None);
                };
                SizingInput::height_and_width(height, width)
            };

            match classify(&sizing) {
                Ok(_) => return Ok(Some(sizing)),
                Err(e) if e.is_input_error() => {
                    writeln!(self.output, "⚠️ {}. Intente nuevamente.", e)?
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn ask_number(&mut self, prompt: &str) -> Result<Option<f64>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match answer.replace(',', ".").parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "⚠️ Ingrese un número válido.")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_yes(answer: Option<&str>) -> bool {
    matches!(
        answer.map(|a| a.trim().to_lowercase()).as_deref(),
        Some("si") | Some("sí") | Some("s")
    )
}
