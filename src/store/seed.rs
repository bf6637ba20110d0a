//! Seed data loaded into a fresh [`MemoryStore`](super::MemoryStore).

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::model::{BusLine, Feedback, FeedbackType, NewFeedback, User};

fn feedback_type(id: &str, name: &str, description: &str, icon: &str) -> FeedbackType {
    FeedbackType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

fn bus_line(id: &str, number: &str, name: &str, route: &str) -> BusLine {
    BusLine {
        id: id.to_string(),
        number: number.to_string(),
        name: name.to_string(),
        route: route.to_string(),
    }
}

pub fn feedback_types() -> Vec<FeedbackType> {
    vec![
        feedback_type("1", "Atraso", "Ônibus com atraso no horário", "clock"),
        feedback_type("2", "Superlotação", "Ônibus com excesso de passageiros", "users"),
        feedback_type("3", "Má conservação", "Veículo em condições precárias", "wrench"),
        feedback_type("4", "Problema com motorista", "Conduta inadequada do motorista", "user"),
        feedback_type("5", "Segurança", "Problemas relacionados à segurança", "shield"),
        feedback_type("6", "Outro", "Outros problemas não listados", "more-horizontal"),
    ]
}

pub fn bus_lines() -> Vec<BusLine> {
    vec![
        bus_line("1", "101", "Circular Olinda", "Centro - Rio Doce"),
        bus_line("2", "102", "Ouro Preto", "Ouro Preto - Centro"),
        bus_line("3", "103", "Jardim Brasil", "Jardim Brasil - Centro"),
        bus_line("4", "104", "Peixinhos", "Peixinhos - Centro"),
        bus_line("5", "105", "Casa Caiada", "Casa Caiada - Centro"),
        bus_line("6", "106", "Aguazinha", "Aguazinha - Centro"),
        bus_line("7", "107", "Alto da Nação", "Alto da Nação - Centro"),
        bus_line("8", "108", "Bultrins", "Bultrins - Centro"),
    ]
}

pub fn users() -> Vec<User> {
    vec![User::new("1", "João Silva", "joao@exemplo.com")]
}

/// Sample complaints by the seed user, newest first, dated one to three
/// days before `now`.
pub fn feedbacks(now: DateTime<Utc>) -> Vec<Feedback> {
    let samples = [
        ("1", "1", "Ônibus atrasou mais de 30 minutos hoje pela manhã.", 1),
        (
            "2",
            "2",
            "Impossível entrar no ônibus na hora do rush. Precisamos de mais veículos.",
            2,
        ),
        ("3", "3", "Bancos rasgados e ar-condicionado não funciona.", 3),
    ];

    samples
        .into_iter()
        .map(|(line, kind, comment, days_ago)| {
            NewFeedback::new("1", line, kind, comment)
                .into_feedback(Uuid::new_v4().to_string(), now - Duration::days(days_ago))
        })
        .collect()
}
