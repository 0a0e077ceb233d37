use reason_rail::prelude::*;

#[derive(Debug, Clone)]
struct Signup {
    email: String,
    age: u32,
}

fn parse(raw: &str) -> ValueOutcome<Signup> {
    let mut fields = raw.split(',');
    let email = fields.next().unwrap_or_default().trim().to_string();
    ValueOutcome::from_std_result(fields.next().unwrap_or_default().trim().parse::<u32>())
        .map_value(|age| Signup { email, age })
        .with_success("signup parsed")
}

fn validate(signup: &Signup) -> Outcome {
    Outcome::merge([
        ensure!(signup.email.contains('@'), "email '{}' is invalid", signup.email),
        ensure!(signup.age >= 18, "age {} is below 18", signup.age),
    ])
}

fn store(signup: Signup) -> ValueOutcome<u64> {
    Outcome::attempt(|| {
        if signup.email.ends_with("@blocked.example") {
            panic!("storage rejected {}", signup.email);
        }
    })
    .bind(|| ValueOutcome::ok(u64::from(signup.age) * 1_000 + signup.email.len() as u64))
    .with_success("signup stored")
}

fn main() {
    println!("Running Quick Start examples...");

    for raw in ["ada@example.com, 36", "bob, 12", "eve@blocked.example, 40", "mallory, x"] {
        let outcome = parse(raw)
            .bind_and_keep_value(validate)
            .bind(store)
            .on_error(|| println!("  (on_error hook ran)"));

        println!("\n{raw}");
        println!("{outcome:#}");
    }
}
