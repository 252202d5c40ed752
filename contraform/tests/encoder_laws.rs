use proptest::prelude::*;

use contraform::{Encoder, id};

fn render() -> Encoder<String, i64> {
    Encoder::new(|n: &i64| format!("n={n}"))
}

fn double() -> Encoder<i64, i64> {
    Encoder::new(|n: &i64| n.wrapping_mul(2))
}

fn excite() -> Encoder<String, String> {
    Encoder::new(|s: &String| format!("{s}!"))
}

#[test]
fn id_emits_its_input_unchanged() {
    assert_eq!(id::<String>().encode(&String::from("same")), "same");
    assert_eq!(id::<Vec<i64>>().encode(&vec![1, 2, 3]), vec![1, 2, 3]);
}

proptest! {
    #[test]
    fn compose_is_associative(n in any::<i64>()) {
        let grouped_left = double().compose(render()).compose(excite());
        let grouped_right = double().compose(render().compose(excite()));
        prop_assert_eq!(grouped_left.encode(&n), grouped_right.encode(&n));
    }

    #[test]
    fn id_is_neutral_on_both_sides(n in any::<i64>()) {
        let expected = render().encode(&n);
        let pre = id::<i64>().compose(render());
        let post = render().compose(id::<String>());
        prop_assert_eq!(pre.encode(&n), expected.clone());
        prop_assert_eq!(post.encode(&n), expected);
    }

    #[test]
    fn contramap_with_identity_is_a_no_op(n in any::<i64>()) {
        let adapted = render().contramap(|m: &i64| *m);
        prop_assert_eq!(adapted.encode(&n), render().encode(&n));
    }

    #[test]
    fn contramap_fuses_like_function_composition(parts in prop::collection::vec(".*", 0..4)) {
        let measure = |s: &String| s.len() as i64;
        let join = |parts: &Vec<String>| parts.concat();
        let stepwise = render().contramap(measure).contramap(join);
        let fused = render().contramap(move |parts: &Vec<String>| measure(&join(parts)));
        prop_assert_eq!(stepwise.encode(&parts), fused.encode(&parts));
    }

    #[test]
    fn encoding_reads_but_never_consumes_the_input(n in any::<i64>()) {
        let encoder = render();
        let first = encoder.encode(&n);
        let second = encoder.encode(&n);
        prop_assert_eq!(first, second);
    }
}
