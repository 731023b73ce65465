use camargs::{derive::*, Opt, Positional};

#[derive(Debug, Declarations)]
#[camargs(program = "report", about = "Reports on the values provided.")]
struct Parameters {
    #[camargs(string, short = 'f', alias = "primary", default = "none", help = "The first value to report.")]
    first: Opt,
    #[camargs(integer, alias = 's', help = "The second value to report.")]
    second: Opt,
    #[camargs(alias = "abc", alias = 't', help = "Whether to include the third value.")]
    third: Opt,
    #[camargs(required, help = "Who the report is for.")]
    name: Positional,
    #[camargs(integer, help = "Their age, in years.")]
    age: Positional,
}

fn main() {
    let parameters = Parameters::parse();
    println!("{parameters:?}");
}
