use contraform::prelude::*;
use contraform_value::{Value, leaf};

enum Event {
    Joined { user: String },
    Message { user: String, body: String },
    Left { user: String },
}

fn base(kind: &'static str) -> Encoder<Value, Event> {
    shape([
        Field::new("type", leaf::tag(kind)),
        field(
            "user",
            |e: &Event| match e {
                Event::Joined { user } | Event::Message { user, .. } | Event::Left { user } => user,
            },
            leaf::string(),
        ),
    ])
}

fn message() -> Encoder<Value, Event> {
    let body = shape([field(
        "body",
        |e: &Event| match e {
            Event::Message { body, .. } => body,
            _ => unreachable!("dispatched on the message tag"),
        },
        leaf::string(),
    )]);
    intersection(base("message"), body)
}

fn event() -> Encoder<Value, Event> {
    sum(
        "type",
        |e: &Event| match e {
            Event::Joined { .. } => "joined",
            Event::Message { .. } => "message",
            Event::Left { .. } => "left",
        },
        [
            ("joined", base("joined")),
            ("message", message()),
            ("left", base("left")),
        ],
    )
}

fn main() {
    let feed = [
        Event::Joined {
            user: String::from("ada"),
        },
        Event::Message {
            user: String::from("ada"),
            body: String::from("hello there"),
        },
        Event::Left {
            user: String::from("ada"),
        },
    ];

    let encoder = event();
    for entry in &feed {
        println!("{}", encoder.encode(entry));
    }
}
