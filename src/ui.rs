use crate::models::TodayStats;

pub fn render_index(date: &str, stats: &TodayStats) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{RATE}}", &stats.attendance_rate.to_string())
        .replace("{{ATTENDED}}", &stats.attended_lectures.to_string())
        .replace("{{TOTAL}}", &stats.total_lectures.to_string())
        .replace("{{UPCOMING}}", &stats.upcoming_lectures.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Посещаемость пар</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4effb;
      --bg-2: #fde6f1;
      --ink: #2b2a33;
      --primary: #8b5cf6;
      --secondary: #ec4899;
      --accent: #0ea5e9;
      --success: #22c55e;
      --danger: #ef4444;
      --muted: #6b6675;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(76, 52, 120, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2) 60%, #e0f2fe 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header {
      text-align: center;
      display: grid;
      gap: 10px;
      justify-items: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
      color: var(--primary);
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    select {
      border-radius: 999px;
      border: 1px solid rgba(139, 92, 246, 0.3);
      padding: 8px 16px;
      font: inherit;
      background: white;
    }

    .banner {
      background: var(--card);
      border-radius: 18px;
      padding: 14px 18px;
      border-left: 4px solid var(--accent);
      color: var(--muted);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      padding: 18px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 8px;
    }

    .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .value {
      font-size: 1.8rem;
      font-weight: 600;
    }

    .bar {
      height: 8px;
      border-radius: 999px;
      background: rgba(139, 92, 246, 0.12);
      overflow: hidden;
    }

    .bar span {
      display: block;
      height: 100%;
      background: var(--primary);
      border-radius: 999px;
      transition: width 600ms ease;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(139, 92, 246, 0.08);
      border-radius: 999px;
    }

    .tab {
      flex: 1;
      border: none;
      border-radius: 999px;
      padding: 10px 14px;
      font: inherit;
      font-weight: 600;
      background: transparent;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: linear-gradient(90deg, var(--primary), var(--secondary));
      color: white;
    }

    .tab-panel {
      display: none;
      gap: 14px;
    }

    .tab-panel.active {
      display: grid;
    }

    .lecture {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    .lecture h3 {
      margin: 0 0 6px;
    }

    .meta {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .badge {
      display: inline-block;
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 0.8rem;
      color: white;
      margin-left: 8px;
    }

    .badge.attended { background: var(--success); }
    .badge.missed { background: var(--danger); }
    .badge.pending { background: var(--secondary); }

    .lecture button {
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: white;
      border: 1px solid rgba(139, 92, 246, 0.3);
    }

    .lecture button.attended {
      background: linear-gradient(90deg, var(--success), var(--accent));
      color: white;
      border: none;
    }

    .week {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .slot {
      border-radius: 12px;
      padding: 8px 10px;
      border: 2px solid rgba(139, 92, 246, 0.2);
      margin-top: 8px;
    }

    .slot.attended { border-color: var(--success); }
    .slot.missed { border-color: var(--danger); }
    .slot.pending { border-color: var(--secondary); }

    .empty {
      text-align: center;
      color: var(--muted);
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--danger);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Посещаемость пар</h1>
      <p class="subtitle">{{DATE}} <span id="period"></span></p>
      <select id="group" aria-label="Группа"></select>
    </header>

    <div class="banner">Напоминание: отмечай посещение сразу после пары.</div>

    <section class="panel">
      <div class="card">
        <span class="label">Общая посещаемость</span>
        <span class="value"><span id="rate">{{RATE}}</span>%</span>
        <div class="bar"><span id="rate-bar" style="width: {{RATE}}%"></span></div>
      </div>
      <div class="card">
        <span class="label">Посещено пар</span>
        <span class="value"><span id="attended">{{ATTENDED}}</span>/<span id="total">{{TOTAL}}</span></span>
      </div>
      <div class="card">
        <span class="label">Предстоящие пары</span>
        <span class="value" id="upcoming">{{UPCOMING}}</span>
      </div>
    </section>

    <nav class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="today" role="tab">Сегодня</button>
      <button class="tab" type="button" data-tab="schedule" role="tab">Расписание</button>
      <button class="tab" type="button" data-tab="stats" role="tab">Статистика</button>
    </nav>

    <section class="tab-panel active" id="panel-today"></section>
    <section class="tab-panel" id="panel-schedule"><div class="week" id="week"></div></section>
    <section class="tab-panel" id="panel-stats"></section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const STATUS_TEXT = { attended: 'Посещено', missed: 'Пропущено', pending: 'Предстоит' };

    const statusEl = document.getElementById('status');
    const groupEl = document.getElementById('group');
    const periodEl = document.getElementById('period');
    const todayPanel = document.getElementById('panel-today');
    const weekEl = document.getElementById('week');
    const statsPanel = document.getElementById('panel-stats');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let pollTimer = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const el = (tag, className, text) => {
      const node = document.createElement(tag);
      if (className) {
        node.className = className;
      }
      if (text !== undefined) {
        node.textContent = text;
      }
      return node;
    };

    const renderStats = (today) => {
      document.getElementById('rate').textContent = today.attendance_rate;
      document.getElementById('rate-bar').style.width = `${today.attendance_rate}%`;
      document.getElementById('attended').textContent = today.attended_lectures;
      document.getElementById('total').textContent = today.total_lectures;
      document.getElementById('upcoming').textContent = today.upcoming_lectures;
    };

    const renderGroups = (groups, selected) => {
      groupEl.replaceChildren(
        ...groups.map((group) => {
          const option = el('option', '', group);
          option.value = group;
          option.selected = group === selected;
          return option;
        })
      );
    };

    const renderToday = (lectures) => {
      if (!lectures.length) {
        todayPanel.replaceChildren(el('div', 'card empty', 'На сегодня пар нет'));
        return;
      }
      todayPanel.replaceChildren(
        ...lectures.map((lecture) => {
          const card = el('div', 'card lecture');
          const info = el('div');
          const title = el('h3', '', lecture.name);
          title.appendChild(el('span', `badge ${lecture.attendance}`, STATUS_TEXT[lecture.attendance]));
          info.append(
            title,
            el('p', 'meta', `${lecture.time} · ${lecture.teacher} · ${lecture.room}`)
          );
          const button = el(
            'button',
            lecture.attendance === 'attended' ? 'attended' : '',
            lecture.attendance === 'attended' ? 'Был' : lecture.attendance === 'missed' ? 'Сбросить' : 'Отметить'
          );
          button.type = 'button';
          button.addEventListener('click', () => {
            toggle(lecture.id).catch((err) => setStatus(err.message, 'error'));
          });
          card.append(info, button);
          return card;
        })
      );
    };

    const renderWeek = (days, mapSlot) => {
      weekEl.replaceChildren(
        ...days.map((day) => {
          const card = el('div', 'card');
          card.append(el('span', 'label', day.day), el('span', 'meta', day.date));
          day.lectures.forEach((slot) => card.appendChild(mapSlot(slot)));
          return card;
        })
      );
    };

    const renderSchedule = (view) => {
      if (view.schedule.length) {
        renderWeek(
          view.schedule.map((day) => ({ ...day, day: day.day.slice(0, 2).toUpperCase() })),
          (slot) => {
            const node = el('div', 'slot');
            node.append(el('strong', '', slot.name), el('p', 'meta', slot.time));
            return node;
          }
        );
      } else if (view.week_overview) {
        renderWeek(view.week_overview, (slot) => {
          const node = el('div', `slot ${slot.attendance}`);
          node.append(el('strong', '', slot.name), el('p', 'meta', slot.time));
          return node;
        });
      }
    };

    const renderSubjects = (stats) => {
      const list = stats.subjects.map((subject) => {
        const card = el('div', 'card');
        card.append(
          el('strong', '', subject.name),
          el('span', 'meta', `${subject.attended}/${subject.total} · ${subject.percentage}%`)
        );
        const bar = el('div', 'bar');
        const fill = el('span');
        fill.style.width = `${subject.percentage}%`;
        fill.style.background = `var(--${subject.color})`;
        bar.appendChild(fill);
        card.appendChild(bar);
        return card;
      });
      const summary = [];
      if (stats.summary) {
        const best = el('div', 'card');
        best.append(
          el('span', 'label', 'Лучший предмет'),
          el('span', 'value', stats.summary.best_subject),
          el('span', 'meta', `${stats.summary.best_percentage}% посещений`)
        );
        const total = el('div', 'card');
        total.append(
          el('span', 'label', 'Всего посещено'),
          el('span', 'value', stats.summary.total_attended),
          el('span', 'meta', `из ${stats.summary.total_scheduled} запланированных`)
        );
        summary.push(best, total);
      }
      statsPanel.replaceChildren(...list, ...summary);
    };

    const render = (view) => {
      renderGroups(view.groups, view.selected_group);
      periodEl.textContent = view.period ? `· ${view.period}` : '';
      renderStats(view.stats.today);
      if (view.loading) {
        todayPanel.replaceChildren(el('div', 'card empty', 'Загружаем расписание...'));
      } else {
        renderToday(view.lectures);
      }
      renderSchedule(view);
      renderSubjects(view.stats);
    };

    const load = async () => {
      const res = await fetch('/api/view');
      if (!res.ok) {
        throw new Error('Не удалось загрузить данные');
      }
      const view = await res.json();
      render(view);
      clearTimeout(pollTimer);
      if (view.loading) {
        pollTimer = setTimeout(() => load().catch((err) => setStatus(err.message, 'error')), 500);
      }
    };

    const toggle = async (id) => {
      const res = await fetch(`/api/lectures/${id}/toggle`, { method: 'POST' });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      await load();
    };

    groupEl.addEventListener('change', async () => {
      const res = await fetch('/api/group', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ group: groupEl.value })
      });
      if (!res.ok) {
        setStatus(await res.text(), 'error');
        return;
      }
      load().catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((tab) => tab.classList.toggle('active', tab === button));
        document.querySelectorAll('.tab-panel').forEach((panel) => {
          panel.classList.toggle('active', panel.id === `panel-${button.dataset.tab}`);
        });
      });
    });

    load().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
