//! Seed content for first-time store initialization.
//!
//! Both store implementations populate the same literal profile and project
//! list when the underlying store is empty. Seeding an already-populated
//! store is a no-op; each implementation performs its own emptiness check.

use crate::models::{NewProject, Profile, ProjectLinks};

/// Username of the single seeded admin account.
pub const ADMIN_USERNAME: &str = "admin";

/// The seeded singleton profile.
#[must_use]
pub fn seed_profile() -> Profile {
    Profile {
        id: 1,
        name: "Manuel Cosovschi".to_string(),
        title: "Estudiante avanzado de Ingeniería en Sistemas".to_string(),
        subtitle: "Proyectos full-stack en producción.".to_string(),
        pitch: "Aprendí construyendo: Desde scripts de automatización hasta aplicaciones web \
                completas durante la carrera. Capacidad para adaptarme a nuevas tecnologías \
                (Node, React, Python) demostrada en proyectos académicos y prácticas. Busco mi \
                primera experiencia formal con ganas de aportar valor desde el primer día y \
                crecer profesionalmente."
            .to_string(),
        email: "manuel.cosovschi@example.com".to_string(),
        linkedin: "linkedin.com/in/manuelcosou".to_string(),
        github: "github.com/manuelcosou".to_string(),
        status: "DISPONIBLE".to_string(),
    }
}

/// The four seeded projects, already carrying their display order
/// (`order_index` 0..3).
#[must_use]
pub fn seed_projects() -> Vec<NewProject> {
    let projects = [
        NewProject {
            title: "FitNow App".to_string(),
            kind: "Tesis".to_string(),
            summary: "App iOS en SwiftUI con backend en Node.js/Express y MySQL. Módulo de \
                      recomendaciones en Python usando Ridge Regression."
                .to_string(),
            problem: "Falta de personalización en rutinas de entrenamiento y seguimiento \
                      eficiente de telemetría."
                .to_string(),
            solution: "Implementación de IA para sugerencias personalizadas y optimización de \
                       navegación GPS/batería."
                .to_string(),
            stack: vec_of(&["SwiftUI", "NodeJS", "MySQL", "Python", "Jupyter"]),
            highlights: vec_of(&[
                "Navegación paso a paso",
                "Telemetría en tiempo real",
                "Ridge Regression",
            ]),
            challenges: vec_of(&["Optimización de batería", "Manejo eficiente de datos GPS"]),
            architecture_diagram: "https://picsum.photos/seed/fitnow/800/600".to_string(),
            links: ProjectLinks {
                github: Some("#".to_string()),
                web: None,
            },
            order_index: 0,
        },
        NewProject {
            title: "Las Cañas - Web".to_string(),
            kind: "Producción".to_string(),
            summary: "Landing Page y Wizard de Reservas para complejo deportivo.".to_string(),
            problem: "Información operativa fragmentada y procesos de reserva manuales \
                      ineficientes."
                .to_string(),
            solution: "Estandarización de políticas y validación de disponibilidad en tiempo \
                       real mediante un wizard guiado."
                .to_string(),
            stack: vec_of(&["React", "Tailwind", "NodeJS"]),
            highlights: vec_of(&[
                "Wizard de reservas",
                "Validación en tiempo real",
                "Políticas unificadas",
            ]),
            challenges: vec_of(&["Manejo de rangos bloqueados", "UX simplificada"]),
            architecture_diagram: "https://picsum.photos/seed/lascanas/800/600".to_string(),
            links: ProjectLinks {
                github: None,
                web: Some("#".to_string()),
            },
            order_index: 1,
        },
        NewProject {
            title: "Las Cañas - Bot".to_string(),
            kind: "Automatización".to_string(),
            summary: "Bot de WhatsApp para gestión de reservas y FAQs.".to_string(),
            problem: "Alta carga de consultas repetitivas por canales de mensajería.".to_string(),
            solution: "Automatización con n8n y derivación a humano para casos complejos."
                .to_string(),
            stack: vec_of(&["n8n", "JavaScript", "WhatsApp API"]),
            highlights: vec_of(&[
                "Flujos automatizados",
                "Hand-off a humano",
                "Sugerencia de fechas",
            ]),
            challenges: vec_of(&["Tono de marca consistente", "Manejo de excepciones"]),
            architecture_diagram: "https://picsum.photos/seed/bot/800/600".to_string(),
            links: ProjectLinks {
                github: Some("#".to_string()),
                web: None,
            },
            order_index: 2,
        },
        NewProject {
            title: "Inmuebles Comerciales SRL".to_string(),
            kind: "Prácticas".to_string(),
            summary: "Plataforma inmobiliaria para gestión de inmuebles comerciales.".to_string(),
            problem: "Necesidad de una herramienta interna para mantenimiento de catálogo y \
                      clientes."
                .to_string(),
            solution: "Desarrollo full-stack con Angular y SQL para gestión eficiente de datos."
                .to_string(),
            stack: vec_of(&["Angular", "SQL", ".NET"]),
            highlights: vec_of(&[
                "Panel de administración",
                "Gestión de catálogo",
                "Mantenimiento",
            ]),
            challenges: vec_of(&["Integración con sistemas legados", "Validación de datos"]),
            architecture_diagram: "https://picsum.photos/seed/inmuebles/800/600".to_string(),
            links: ProjectLinks {
                github: None,
                web: Some("#".to_string()),
            },
            order_index: 3,
        },
    ];

    projects.into_iter().collect()
}

fn vec_of(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
