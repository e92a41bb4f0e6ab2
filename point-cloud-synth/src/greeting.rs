/// Format the greeting line.
pub fn greeting(name: &str) -> String {
    format!("Hi, {name}")
}

pub fn greet(name: &str) {
    println!("{}", greeting(name));
}
