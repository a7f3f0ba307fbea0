use super::predicate::Proposition;

pub fn build_arg_string(args: &[String]) -> String {
    let first = args.iter().take(1).fold(String::new(), |acc, item| acc + item);
    args.iter().skip(1).fold(first, |acc, item| acc + ", " + item)
}

pub fn build_prop_string(props: &[Proposition]) -> String {
    let first = props.iter().take(1).fold(String::new(), |acc, item| acc + &item.to_string());
    props.iter().skip(1).fold(first, |acc, item| acc + " " + &item.to_string())
}
