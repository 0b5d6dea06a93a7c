// benches/parse.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url::Url;

use job_scrape::specs::{detail::DetailParser, results::ResultsParser, selectors::SelectorTable};

fn results_sample(n: usize) -> String {
    let mut html = String::from("<html><body><div id=\"mosaic-provider-jobcards\">");
    for i in 0..n {
        html.push_str(&format!(
            r#"<a class="tapItem fs-unmask result" href="/rc/clk?jk=job{i}">
                 <h2 class="jobTitle"><span>Junior Data Analyst {i}</span></h2>
                 <span class="companyName">Company {i}</span>
                 <span class="date"><span class="visually-hidden">Posted</span>{i} days ago</span>
               </a>"#
        ));
    }
    html.push_str("</div></body></html>");
    html
}

fn detail_sample() -> String {
    let para = "<p>Work with analysts and engineers to build reporting on top of our warehouse.</p>";
    format!(
        r#"<html><body>
        <h1 class="jobsearch-JobInfoHeader-title">Junior Data Analyst</h1>
        <div class="jobsearch-JobInfoHeader-subtitle">
          <div><div class="icl-u-lg-mr--sm icl-u-xs-mr--xs">Acme</div><div>4.1</div></div>
          <div>London</div>
        </div>
        <span class="icl-u-xs-mr--xs">£30,000 a year</span>
        <div id="jobDescriptionText">{}</div>
        </body></html>"#,
        para.repeat(60)
    )
}

fn bench_parsers(c: &mut Criterion) {
    let table = SelectorTable::indeed_uk();
    let results = ResultsParser::new(Url::parse("https://uk.indeed.com").unwrap(), &table).unwrap();
    let detail = DetailParser::new(&table).unwrap();
    let page = results_sample(15);
    let job = detail_sample();

    c.bench_function("results_page_15", |b| {
        b.iter(|| {
            let stubs = results.parse("bench", black_box(&page)).unwrap();
            black_box(stubs.len())
        })
    });

    c.bench_function("detail_page", |b| {
        b.iter(|| black_box(detail.parse(black_box(&job))))
    });
}

criterion_group!(benches, bench_parsers);
criterion_main!(benches);
