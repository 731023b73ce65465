use camargs::{CommandLineParser, Kind, Opt, Positional};

fn main() {
    let mut first = Opt::new("first", 'f', Kind::String)
        .alias("primary")
        .help("The first value to report.")
        .default("none");
    let mut second = Opt::long("second", Kind::Integer)
        .alias('s')
        .help("The second value to report.");
    let mut third = Opt::long("third", Kind::Flag)
        .alias("abc")
        .alias('t')
        .help("Whether to include the third value.");
    let mut name = Positional::required("name", Kind::String).help("Who the report is for.");
    let mut age = Positional::optional("age", Kind::Integer).help("Their age, in years.");

    let parser = CommandLineParser::new("report")
        .about("Reports on the values provided.")
        .add_option(&mut first)
        .add_option(&mut second)
        .add_option(&mut third)
        .add_positional(&mut name)
        .add_positional(&mut age)
        .build();
    parser.parse();

    println!("first: {:?}", first.value());
    println!("second: {:?} (found: {})", second.value(), second.found());
    println!("third: {}", third.found());
    println!("name: {:?}", name.value());
    println!("age: {:?}", age.value());
}
