use contraform::prelude::*;
use contraform_value::{Value, leaf};

struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

fn node() -> Encoder<Value, Node> {
    lazy(|| {
        shape([
            field("value", |n: &Node| &n.value, leaf::integer()),
            field("next", |n: &Node| &n.next, nullable(node().via_deref())),
        ])
    })
}

fn main() {
    let list = Node {
        value: 1,
        next: Some(Box::new(Node {
            value: 2,
            next: Some(Box::new(Node {
                value: 3,
                next: None,
            })),
        })),
    };
    println!("{}", node().encode(&list));
}
