//! Answer-section rewriting.

use hickory_proto::op::Message;
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use natdns_domain::RuleTable;
use tracing::trace;

/// Rewrite IPv4 answer addresses through the rule table, keyed on the
/// original query name.
///
/// A records whose address translates to a different address are replaced
/// by a record with the same owner name, class and TTL carrying the
/// translated address. Everything else (AAAA, CNAME, ...) and the answer
/// order pass through untouched. Returns the number of rewritten records.
pub fn rewrite_answers(reply: &mut Message, query_domain: &str, rules: &RuleTable) -> usize {
    if rules.is_empty() {
        return 0;
    }

    let mut rewritten = 0;
    let answers = reply.take_answers();
    let mut new_answers = Vec::with_capacity(answers.len());

    for record in answers {
        let translated = match record.data() {
            RData::A(a) => {
                let nat_addr = rules.translate_v4(query_domain, a.0);
                (nat_addr != a.0).then_some((a.0, nat_addr))
            }
            _ => None,
        };

        match translated {
            Some((original, nat_addr)) => {
                trace!(
                    domain = %query_domain,
                    original = %original,
                    translated = %nat_addr,
                    "Translated answer address"
                );
                let mut replacement = Record::from_rdata(
                    record.name().clone(),
                    record.ttl(),
                    RData::A(A(nat_addr)),
                );
                replacement.set_dns_class(record.dns_class());
                new_answers.push(replacement);
                rewritten += 1;
            }
            None => new_answers.push(record),
        }
    }

    reply.insert_answers(new_answers);
    rewritten
}
